use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::config;

const HEADLINE: &str = "Does your business need funding?";
const DESCRIPTION: &str =
    "Work out your expected eligibility for free and register your details to unlock tailored funding offers.";

/// Types the hero headline and description character by character, each
/// on its own cadence. Once a line completes its cursor disappears and
/// the text never changes again.
#[function_component(Typewriter)]
pub fn typewriter() -> Html {
    let headline_shown = use_state(|| 0usize);
    let description_shown = use_state(|| 0usize);

    {
        let headline_shown = headline_shown.setter();
        let description_shown = description_shown.setter();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                {
                    let alive = alive.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::HEADLINE_START_DELAY_MS).await;
                        for shown in 1..=HEADLINE.chars().count() {
                            if !alive.get() {
                                return;
                            }
                            headline_shown.set(shown);
                            TimeoutFuture::new(config::HEADLINE_TYPE_MS).await;
                        }
                    });
                }
                {
                    let alive = alive.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::DESCRIPTION_START_DELAY_MS).await;
                        for shown in 1..=DESCRIPTION.chars().count() {
                            if !alive.get() {
                                return;
                            }
                            description_shown.set(shown);
                            TimeoutFuture::new(config::DESCRIPTION_TYPE_MS).await;
                        }
                    });
                }
                move || alive.set(false)
            },
            (),
        );
    }

    let headline_done = *headline_shown >= HEADLINE.chars().count();
    let description_done = *description_shown >= DESCRIPTION.chars().count();
    let headline: String = HEADLINE.chars().take(*headline_shown).collect();
    let description: String = DESCRIPTION.chars().take(*description_shown).collect();

    html! {
        <div class="typewriter">
            <style>{TYPEWRITER_CSS}</style>
            <h1 class="hero-title">
                <span id="typewriterText">{ headline }</span>
                {
                    if !headline_done {
                        html! { <span class="typewriter-cursor">{"|"}</span> }
                    } else {
                        html! {}
                    }
                }
            </h1>
            <p class="hero-description">
                <span id="typewriterDescription">{ description }</span>
                {
                    if !description_done {
                        html! { <span class="typewriter-cursor-desc">{"|"}</span> }
                    } else {
                        html! {}
                    }
                }
            </p>
        </div>
    }
}

const TYPEWRITER_CSS: &str = r#"
    .typewriter-cursor,
    .typewriter-cursor-desc {
        animation: cursor-blink 1s step-end infinite;
    }

    @keyframes cursor-blink {
        0%, 100% {
            opacity: 1;
        }
        50% {
            opacity: 0;
        }
    }
"#;
