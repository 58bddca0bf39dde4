use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use gloo_timers::callback::Timeout;
use chrono::Utc;

use crate::config;

#[derive(Clone, Copy, PartialEq)]
enum SplashPhase {
    Visible,
    Fading,
    Gone,
}

/// Full-screen splash shown while the page settles. It stays up for at
/// least the configured minimum counted from mount, fades, then leaves
/// the tree entirely.
#[function_component(Splash)]
pub fn splash() -> Html {
    let phase = use_state(|| SplashPhase::Visible);

    {
        let phase = phase.setter();
        use_effect_with_deps(
            move |_| {
                let mounted_at = Utc::now();
                let window = window().unwrap();
                let document = window.document().unwrap();

                let begin_countdown = move || -> Timeout {
                    let phase = phase.clone();
                    let elapsed = (Utc::now() - mounted_at).num_milliseconds();
                    let remaining = (config::SPLASH_MIN_VISIBLE_MS - elapsed).max(0) as u32;
                    Timeout::new(remaining, move || phase.set(SplashPhase::Fading))
                };

                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let mut load_listener = None;
                if document.ready_state() == "complete" {
                    *pending.borrow_mut() = Some(begin_countdown());
                } else {
                    // Still loading: start the countdown once the page
                    // finishes.
                    let pending = pending.clone();
                    let listener = Closure::wrap(Box::new(move || {
                        *pending.borrow_mut() = Some(begin_countdown());
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "load",
                            listener.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    load_listener = Some(listener);
                }

                move || {
                    pending.borrow_mut().take();
                    if let Some(listener) = load_listener {
                        let _ = window.remove_event_listener_with_callback(
                            "load",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let phase_handle = phase.clone();
        use_effect_with_deps(
            move |current: &SplashPhase| {
                let timeout = if *current == SplashPhase::Fading {
                    let phase = phase_handle.setter();
                    Some(Timeout::new(config::SPLASH_FADE_MS, move || {
                        phase.set(SplashPhase::Gone);
                    }))
                } else {
                    None
                };
                move || drop(timeout)
            },
            *phase,
        );
    }

    if *phase == SplashPhase::Gone {
        return html! {};
    }

    html! {
        <div
            id="loadingScreen"
            class={classes!(
                "loading-screen",
                (*phase == SplashPhase::Fading).then(|| "fade-out")
            )}
        >
            <style>{SPLASH_CSS}</style>
            <div class="loading-logo">{"fundcheck"}</div>
            <div class="loading-spinner"></div>
        </div>
    }
}

const SPLASH_CSS: &str = r#"
    .loading-screen {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        background: linear-gradient(160deg, #667eea 0%, #764ba2 100%);
        z-index: 20000;
        opacity: 1;
        transition: opacity 0.5s ease;
    }

    .loading-screen.fade-out {
        opacity: 0;
        pointer-events: none;
    }

    .loading-logo {
        font-size: 2rem;
        font-weight: 700;
        color: white;
        letter-spacing: 0.05em;
    }

    .loading-spinner {
        width: 36px;
        height: 36px;
        border: 3px solid rgba(255, 255, 255, 0.3);
        border-top-color: white;
        border-radius: 50%;
        animation: spinner-turn 0.9s linear infinite;
    }

    @keyframes spinner-turn {
        to {
            transform: rotate(360deg);
        }
    }
"#;
