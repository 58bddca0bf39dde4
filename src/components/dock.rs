use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::pages::landing::{scroll_to_section, scroll_to_top};

const PRESS_PULSE_MS: u32 = 200;

#[derive(Clone, Copy)]
enum DockTarget {
    Top,
    Calculator,
    Solutions,
    Articles,
    Contact,
}

const ITEMS: [(&str, &str, DockTarget); 5] = [
    ("🏠", "Home", DockTarget::Top),
    ("🧮", "Calculator", DockTarget::Calculator),
    ("💼", "Solutions", DockTarget::Solutions),
    ("📚", "Articles", DockTarget::Articles),
    ("✉️", "Contact", DockTarget::Contact),
];

#[derive(Properties, PartialEq)]
pub struct MobileDockProps {
    pub on_contact: Callback<()>,
}

#[function_component(MobileDock)]
pub fn mobile_dock(props: &MobileDockProps) -> Html {
    let pressed = use_state(|| None::<usize>);
    let press_timer = use_mut_ref(|| None::<Timeout>);

    let activate = {
        let pressed = pressed.clone();
        let press_timer = press_timer.clone();
        let on_contact = props.on_contact.clone();
        Callback::from(move |index: usize| {
            pressed.set(Some(index));
            let clear = pressed.setter();
            *press_timer.borrow_mut() = Some(Timeout::new(PRESS_PULSE_MS, move || {
                clear.set(None);
            }));
            match ITEMS[index].2 {
                DockTarget::Top => scroll_to_top(),
                // Solutions has no section of its own and lands on the
                // calculator as well.
                DockTarget::Calculator | DockTarget::Solutions => scroll_to_section("calculator"),
                DockTarget::Articles => scroll_to_section("articles"),
                DockTarget::Contact => on_contact.emit(()),
            }
        })
    };

    html! {
        <nav class="mobile-dock">
            <style>{DOCK_CSS}</style>
            { for ITEMS.iter().enumerate().map(|(index, (icon, label, _))| {
                let onclick = {
                    let activate = activate.clone();
                    Callback::from(move |_: MouseEvent| activate.emit(index))
                };
                html! {
                    <button
                        class={classes!("dock-item", (*pressed == Some(index)).then(|| "pressed"))}
                        {onclick}
                    >
                        <span class="dock-icon">{ *icon }</span>
                        <span class="dock-label">{ *label }</span>
                    </button>
                }
            }) }
        </nav>
    }
}

const DOCK_CSS: &str = r#"
    .mobile-dock {
        position: fixed;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        display: none;
        gap: 0.5rem;
        background: rgba(255, 255, 255, 0.95);
        border-radius: 1.25rem;
        padding: 0.5rem 0.75rem;
        box-shadow: 0 10px 30px rgba(44, 62, 80, 0.25);
        z-index: 2000;
    }

    .dock-item {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        background: none;
        border: none;
        padding: 0.4rem 0.6rem;
        cursor: pointer;
        transition: transform 0.3s ease;
    }

    .dock-item:hover {
        transform: translateY(-12px) scale(1.15);
    }

    .dock-item.pressed {
        transform: scale(0.9);
    }

    .dock-icon {
        font-size: 1.4rem;
        transition: transform 0.3s ease;
    }

    .dock-item:hover .dock-icon {
        transform: scale(1.2);
    }

    .dock-label {
        position: absolute;
        top: -1.1rem;
        font-size: 0.65rem;
        color: #2c3e50;
        opacity: 0;
        transition: opacity 0.3s ease, transform 0.3s ease;
        white-space: nowrap;
    }

    .dock-item:hover .dock-label {
        opacity: 1;
        transform: translateY(-8px);
    }

    @media (max-width: 768px) {
        .mobile-dock {
            display: flex;
        }
    }
"#;
