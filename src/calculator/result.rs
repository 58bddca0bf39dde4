use yew::prelude::*;
use web_sys::window;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub percentage: u32,
    pub message: &'static str,
    pub on_close: Callback<()>,
}

/// Read-only summary shown once the calculator is submitted. Closing it
/// leaves the session terminal; "New calculation" reloads the page,
/// which is the only reset path.
#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let on_background = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_restart = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let _ = window.location().reload();
        }
    });

    html! {
        <div class="calculation-modal" onclick={on_background}>
            <style>{RESULT_CSS}</style>
            <div class="result-card" onclick={stop_bubble}>
                <div class="result-icon">{"🎯"}</div>
                <h3 class="result-title">{"Your eligibility result"}</h3>
                <div class="result-percentage">{ format!("{}%", props.percentage) }</div>
                <p class="result-message">{ props.message }</p>
                <div class="result-actions">
                    <button class="result-close-button" onclick={on_close}>
                        {"Close"}
                    </button>
                    <button class="result-restart-button" onclick={on_restart}>
                        {"New calculation"}
                    </button>
                </div>
            </div>
        </div>
    }
}

const RESULT_CSS: &str = r#"
    .calculation-modal {
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

    .result-card {
        background: white;
        border-radius: 1rem;
        padding: 2rem;
        max-width: 500px;
        width: 100%;
        text-align: center;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
        animation: result-pop 0.3s ease forwards;
    }

    @keyframes result-pop {
        from {
            transform: scale(0.8);
        }
        to {
            transform: scale(1);
        }
    }

    .result-icon {
        font-size: 3rem;
        margin-bottom: 1rem;
    }

    .result-title {
        font-size: 1.5rem;
        font-weight: 600;
        color: #2c3e50;
        margin-bottom: 1rem;
    }

    .result-percentage {
        font-size: 2.5rem;
        font-weight: 700;
        color: #667eea;
        margin-bottom: 1rem;
    }

    .result-message {
        color: #6c757d;
        line-height: 1.6;
        margin-bottom: 2rem;
    }

    .result-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }

    .result-close-button {
        background: #667eea;
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-weight: 600;
    }

    .result-restart-button {
        background: #28a745;
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-weight: 600;
    }
"#;
