use yew::prelude::*;
use web_sys::window;
use gloo_timers::callback::Timeout;

use crate::components::typewriter::Typewriter;
use crate::config;
use crate::pages::landing::scroll_to_section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let entered = use_state(|| false);

    // Entrance runs sooner on small screens where the hero is the whole
    // first viewport.
    {
        let entered = entered.setter();
        use_effect_with_deps(
            move |_| {
                let is_mobile = window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|width| width.as_f64())
                    .map(|width| width <= config::MOBILE_BREAKPOINT_PX as f64)
                    .unwrap_or(false);
                let delay = if is_mobile { 100 } else { 500 };
                let timeout = Timeout::new(delay, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <header id="top" class={classes!("hero", (*entered).then(|| "hero-entered"))}>
            <style>{HERO_CSS}</style>
            <div class="hero-content">
                <img class="mobile-logo-img" src="/assets/logo.svg" alt="fundcheck" />
                <Typewriter />
                <div class="hero-buttons">
                    <button
                        class="btn btn-primary"
                        onclick={Callback::from(|_| scroll_to_section("calculator"))}
                    >
                        {"Check my eligibility"}
                    </button>
                    <button
                        class="btn btn-secondary"
                        onclick={Callback::from(|_| scroll_to_section("articles"))}
                    >
                        {"Read the guides"}
                    </button>
                </div>
            </div>
        </header>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        min-height: 85vh;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(160deg, #667eea 0%, #764ba2 100%);
        padding: 7rem 1.5rem 4rem;
    }

    .hero-content {
        max-width: 720px;
        text-align: center;
        color: white;
    }

    .hero-title {
        font-size: clamp(2rem, 5vw, 3.25rem);
        font-weight: 700;
        min-height: 1.2em;
        margin: 0 0 1rem;
    }

    .hero-description {
        font-size: 1.15rem;
        line-height: 1.7;
        color: rgba(255, 255, 255, 0.9);
        min-height: 3.4em;
        margin: 0 0 2rem;
    }

    .mobile-logo-img {
        display: none;
        width: 72px;
        margin: 0 auto 1.5rem;
    }

    .hero-buttons {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }

    .btn {
        border: none;
        padding: 0.9rem 2rem;
        border-radius: 0.5rem;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
    }

    .btn-primary {
        background: white;
        color: #667eea;
    }

    .btn-secondary {
        background: rgba(255, 255, 255, 0.15);
        color: white;
        border: 1px solid rgba(255, 255, 255, 0.5);
    }

    .mobile-logo-img,
    .hero-description,
    .hero-buttons .btn {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s cubic-bezier(0.215, 0.61, 0.355, 1),
            transform 0.6s cubic-bezier(0.215, 0.61, 0.355, 1);
    }

    .hero-entered .mobile-logo-img {
        opacity: 1;
        transform: translateY(0);
    }

    .hero-entered .hero-description {
        opacity: 1;
        transform: translateY(0);
        transition-delay: 0.2s;
    }

    .hero-entered .hero-buttons .btn {
        opacity: 1;
        transform: translateY(0);
        transition-delay: 0.4s;
    }

    .hero-entered .hero-buttons .btn:nth-child(2) {
        transition-delay: 0.5s;
    }

    .hero-entered .hero-buttons .btn:hover {
        transform: scale(1.05);
        transition: transform 0.3s ease;
    }

    @media (max-width: 768px) {
        .mobile-logo-img {
            display: block;
        }
    }
"#;
