use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, MouseEvent, Node};
use gloo_timers::callback::Timeout;

use crate::config;
use crate::pages::landing::scroll_to_section;

const COLLAPSED_HEIGHT_PX: i32 = 60;
const EXPANDED_HEIGHT_PX: i32 = 260;
const CONTENT_PADDING_PX: i32 = 16;
const CARD_STAGGER_MS: u32 = 80;

struct NavCardDef {
    title: &'static str,
    blurb: &'static str,
    links: &'static [(&'static str, NavTarget)],
}

#[derive(Clone, Copy, PartialEq)]
enum NavTarget {
    Calculator,
    Articles,
    Contact,
}

const CARDS: [NavCardDef; 3] = [
    NavCardDef {
        title: "Services",
        blurb: "See where your business stands before you apply.",
        links: &[
            ("Eligibility calculator", NavTarget::Calculator),
            ("Funding guides", NavTarget::Articles),
        ],
    },
    NavCardDef {
        title: "Solutions",
        blurb: "Financing shaped around how your business earns.",
        links: &[
            ("Working capital", NavTarget::Calculator),
            ("Growth financing", NavTarget::Calculator),
        ],
    },
    NavCardDef {
        title: "Resources",
        blurb: "Advice from people who read applications all day.",
        links: &[
            ("Articles", NavTarget::Articles),
            ("Contact us", NavTarget::Contact),
        ],
    },
];

fn measured_height(content_ref: &NodeRef) -> i32 {
    let is_mobile = window()
        .and_then(|w| {
            w.match_media(&format!("(max-width: {}px)", config::MOBILE_BREAKPOINT_PX))
                .ok()
        })
        .flatten()
        .map(|media| media.matches())
        .unwrap_or(false);
    if !is_mobile {
        return EXPANDED_HEIGHT_PX;
    }
    // Hidden via visibility, not display, so the content keeps its
    // layout and stays measurable.
    match content_ref.cast::<HtmlElement>() {
        Some(content) => COLLAPSED_HEIGHT_PX + content.scroll_height() + CONTENT_PADDING_PX,
        None => EXPANDED_HEIGHT_PX,
    }
}

#[derive(Properties, PartialEq)]
pub struct CardNavProps {
    pub on_contact: Callback<()>,
}

#[function_component(CardNav)]
pub fn card_nav(props: &CardNavProps) -> Html {
    let expanded = use_state(|| false);
    let nav_height = use_state(|| COLLAPSED_HEIGHT_PX);
    let nav_ref = use_node_ref();
    let content_ref = use_node_ref();
    let resize_debounce = use_mut_ref(|| None::<Timeout>);

    let close = {
        let expanded = expanded.clone();
        let nav_height = nav_height.clone();
        Callback::from(move |_: ()| {
            expanded.set(false);
            nav_height.set(COLLAPSED_HEIGHT_PX);
        })
    };

    let toggle = {
        let expanded = expanded.clone();
        let nav_height = nav_height.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *expanded {
                expanded.set(false);
                nav_height.set(COLLAPSED_HEIGHT_PX);
            } else {
                nav_height.set(measured_height(&content_ref));
                expanded.set(true);
            }
        })
    };

    // Escape and click-outside close the menu; resizes re-measure the
    // expanded height after a short debounce. Listeners are re-registered
    // whenever the open state flips.
    {
        let nav_ref = nav_ref.clone();
        let content_ref = content_ref.clone();
        let close = close.clone();
        let nav_height = nav_height.clone();
        let resize_debounce = resize_debounce.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let is_open = *is_open;
                let window = window().unwrap();
                let document = window.document().unwrap();

                let listeners = if let Some(nav) = nav_ref.cast::<HtmlElement>() {
                    let keydown = {
                        let close = close.clone();
                        Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if is_open && e.key() == "Escape" {
                                close.emit(());
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>)
                    };
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    let click = {
                        let close = close.clone();
                        Closure::wrap(Box::new(move |e: MouseEvent| {
                            if !is_open {
                                return;
                            }
                            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                            let inside = target
                                .as_ref()
                                .map(|node| nav.contains(Some(node)))
                                .unwrap_or(false);
                            if !inside {
                                close.emit(());
                            }
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };
                    document
                        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
                        .unwrap();

                    let resize = {
                        let nav_height = nav_height.clone();
                        let content_ref = content_ref.clone();
                        let resize_debounce = resize_debounce.clone();
                        Closure::wrap(Box::new(move || {
                            let nav_height = nav_height.clone();
                            let content_ref = content_ref.clone();
                            *resize_debounce.borrow_mut() = Some(Timeout::new(
                                config::NAV_RESIZE_DEBOUNCE_MS,
                                move || {
                                    if is_open {
                                        nav_height.set(measured_height(&content_ref));
                                    }
                                },
                            ));
                        }) as Box<dyn FnMut()>)
                    };
                    window
                        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                        .unwrap();

                    Some((keydown, click, resize))
                } else {
                    log::error!("card nav: required elements not found, menu left inert");
                    None
                };

                let resize_debounce = resize_debounce.clone();
                move || {
                    if let Some((keydown, click, resize)) = listeners {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize.as_ref().unchecked_ref(),
                        );
                    }
                    resize_debounce.borrow_mut().take();
                }
            },
            *expanded,
        );
    }

    let follow_link = {
        let close = close.clone();
        let on_contact = props.on_contact.clone();
        Callback::from(move |(e, target): (MouseEvent, NavTarget)| {
            e.prevent_default();
            close.emit(());
            match target {
                NavTarget::Calculator => scroll_to_section("calculator"),
                NavTarget::Articles => scroll_to_section("articles"),
                NavTarget::Contact => on_contact.emit(()),
            }
        })
    };

    html! {
        <nav
            id="cardNav"
            ref={nav_ref}
            class={classes!("card-nav", (*expanded).then(|| "open"))}
            style={format!("height: {}px;", *nav_height)}
        >
            <style>{NAV_CSS}</style>
            <div class="card-nav-top">
                <button
                    id="hamburgerMenu"
                    class={classes!("hamburger-menu", (*expanded).then(|| "open"))}
                    aria-label={if *expanded { "Close menu" } else { "Open menu" }}
                    onclick={toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <a class="nav-logo" href="/">{"fundcheck"}</a>
                <button
                    class="nav-cta"
                    onclick={Callback::from(|_: MouseEvent| scroll_to_section("calculator"))}
                >
                    {"Check eligibility"}
                </button>
            </div>
            <div
                id="cardNavContent"
                ref={content_ref}
                class="card-nav-content"
                aria-hidden={(!*expanded).to_string()}
            >
                { for CARDS.iter().enumerate().map(|(index, card)| html! {
                    <div
                        class="nav-card"
                        style={format!("--stagger: {}ms;", index as u32 * CARD_STAGGER_MS)}
                    >
                        <h3 class="nav-card-title">{ card.title }</h3>
                        <p class="nav-card-blurb">{ card.blurb }</p>
                        <div class="nav-card-links">
                            { for card.links.iter().map(|(label, target)| {
                                let onclick = {
                                    let follow_link = follow_link.clone();
                                    let target = *target;
                                    Callback::from(move |e: MouseEvent| {
                                        follow_link.emit((e, target));
                                    })
                                };
                                html! {
                                    <a class="nav-card-link" href="#" {onclick}>{ *label }</a>
                                }
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .card-nav {
        position: fixed;
        top: 1rem;
        left: 50%;
        transform: translateX(-50%);
        width: min(960px, calc(100% - 2rem));
        background: rgba(255, 255, 255, 0.97);
        border-radius: 1rem;
        box-shadow: 0 8px 30px rgba(44, 62, 80, 0.15);
        overflow: hidden;
        z-index: 1000;
        transition: height 0.4s cubic-bezier(0.215, 0.61, 0.355, 1);
    }

    .card-nav-top {
        height: 60px;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 1rem;
    }

    .hamburger-menu {
        width: 40px;
        height: 40px;
        display: flex;
        flex-direction: column;
        justify-content: center;
        gap: 6px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 8px;
    }

    .hamburger-menu span {
        display: block;
        height: 2px;
        background: #2c3e50;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }

    .hamburger-menu.open span:nth-child(1) {
        transform: translateY(8px) rotate(45deg);
    }

    .hamburger-menu.open span:nth-child(2) {
        opacity: 0;
    }

    .hamburger-menu.open span:nth-child(3) {
        transform: translateY(-8px) rotate(-45deg);
    }

    .nav-logo {
        font-size: 1.25rem;
        font-weight: 700;
        color: #2c3e50;
        text-decoration: none;
    }

    .nav-cta {
        background: #667eea;
        color: white;
        border: none;
        padding: 0.5rem 1.25rem;
        border-radius: 0.5rem;
        font-weight: 600;
        cursor: pointer;
    }

    .card-nav-content {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 0.75rem;
        padding: 0 1rem 1rem;
        visibility: hidden;
        pointer-events: none;
    }

    .card-nav.open .card-nav-content {
        visibility: visible;
        pointer-events: auto;
    }

    .nav-card {
        background: #f8f9fa;
        border-radius: 0.75rem;
        padding: 1rem;
        opacity: 0;
        transform: translateY(50px);
        transition: transform 0.4s cubic-bezier(0.215, 0.61, 0.355, 1),
            opacity 0.4s cubic-bezier(0.215, 0.61, 0.355, 1);
    }

    .card-nav.open .nav-card {
        opacity: 1;
        transform: translateY(0);
        transition-delay: var(--stagger);
    }

    .nav-card-title {
        margin: 0 0 0.25rem;
        font-size: 1rem;
        color: #2c3e50;
    }

    .nav-card-blurb {
        margin: 0 0 0.5rem;
        font-size: 0.8rem;
        color: #6c757d;
    }

    .nav-card-links {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
    }

    .nav-card-link {
        color: #667eea;
        font-size: 0.9rem;
        font-weight: 600;
        text-decoration: none;
    }

    .nav-card-link:hover {
        text-decoration: underline;
    }

    @media (max-width: 768px) {
        .card-nav-content {
            grid-template-columns: 1fr;
        }
    }
"#;
