use yew::prelude::*;
use web_sys::window;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let on_background = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_mail = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target("mailto:hello@fundcheck.io", "_blank");
        }
    });

    html! {
        <div class="contact-modal" onclick={on_background}>
            <style>{CONTACT_CSS}</style>
            <div class="contact-card" onclick={stop_bubble}>
                <div class="contact-icon">{"📞"}</div>
                <h3 class="contact-title">{"Get in touch"}</h3>
                <div class="contact-details">
                    <p><strong>{"Email: "}</strong>{"hello@fundcheck.io"}</p>
                    <p><strong>{"Phone: "}</strong>{"+966 50 123 4567"}</p>
                    <p><strong>{"Address: "}</strong>{"Riyadh, Saudi Arabia"}</p>
                </div>
                <div class="contact-actions">
                    <button class="contact-close-button" onclick={on_close}>
                        {"Close"}
                    </button>
                    <button class="contact-mail-button" onclick={on_mail}>
                        {"Send an email"}
                    </button>
                </div>
            </div>
        </div>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-modal {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        background: rgba(0, 0, 0, 0.8);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 10000;
        padding: 2rem;
    }

    .contact-card {
        background: white;
        border-radius: 1rem;
        padding: 2rem;
        max-width: 500px;
        width: 100%;
        text-align: center;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
        animation: contact-pop 0.3s ease forwards;
    }

    @keyframes contact-pop {
        from {
            transform: scale(0.8);
        }
        to {
            transform: scale(1);
        }
    }

    .contact-icon {
        font-size: 3rem;
        margin-bottom: 1rem;
    }

    .contact-title {
        font-size: 1.5rem;
        font-weight: 600;
        color: #2c3e50;
        margin-bottom: 1rem;
    }

    .contact-details {
        text-align: left;
        margin-bottom: 1.5rem;
    }

    .contact-details p {
        color: #6c757d;
        margin-bottom: 0.5rem;
    }

    .contact-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }

    .contact-close-button {
        background: #667eea;
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-weight: 600;
    }

    .contact-mail-button {
        background: #28a745;
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-weight: 600;
    }
"#;
