use yew::prelude::*;
use web_sys::HtmlSelectElement;
use gloo_timers::callback::Timeout;

use crate::calculator::result::ResultModal;
use crate::calculator::session::{FormAction, FormSession, TOTAL_STEPS};
use crate::config;

struct StepDef {
    field: &'static str,
    prompt: &'static str,
    options: &'static [(&'static str, &'static str)],
}

const STEPS: [StepDef; 5] = [
    StepDef {
        field: "businessType",
        prompt: "What sector does your business operate in?",
        options: &[
            ("technology", "Technology"),
            ("healthcare", "Healthcare"),
            ("services", "Professional services"),
            ("manufacturing", "Manufacturing"),
            ("retail", "Retail"),
            ("wholesale", "Wholesale trade"),
            ("construction", "Construction"),
            ("education", "Education"),
            ("restaurants", "Restaurants and hospitality"),
            ("other", "Other"),
        ],
    },
    StepDef {
        field: "annualRevenue",
        prompt: "What is your annual revenue?",
        options: &[
            ("less-187500", "Less than 187,500 SAR"),
            ("187500-375000", "187,500 to 375,000 SAR"),
            ("375000-937500", "375,000 to 937,500 SAR"),
            ("937500-1875000", "937,500 to 1,875,000 SAR"),
            ("1875000-3750000", "1,875,000 to 3,750,000 SAR"),
            ("more-3750000", "More than 3,750,000 SAR"),
        ],
    },
    StepDef {
        field: "profitMargin",
        prompt: "What is your net profit margin?",
        options: &[
            ("less-10", "Less than 10%"),
            ("10-20", "10% to 20%"),
            ("20-30", "20% to 30%"),
            ("30-40", "30% to 40%"),
            ("40-50", "40% to 50%"),
            ("more-50", "More than 50%"),
        ],
    },
    StepDef {
        field: "companyAge",
        prompt: "How long has your business been operating?",
        options: &[
            ("less-1", "Less than a year"),
            ("1-2", "1 to 2 years"),
            ("3-5", "3 to 5 years"),
            ("6-10", "6 to 10 years"),
            ("11-20", "11 to 20 years"),
            ("more-20", "More than 20 years"),
        ],
    },
    StepDef {
        field: "employees",
        prompt: "How many people do you employ?",
        options: &[
            ("1-5", "1 to 5"),
            ("6-10", "6 to 10"),
            ("11-25", "11 to 25"),
            ("26-50", "26 to 50"),
            ("51-100", "51 to 100"),
            ("more-100", "More than 100"),
        ],
    },
];

fn option_label(def: &StepDef, key: &str) -> Option<&'static str> {
    def.options
        .iter()
        .find(|(option_key, _)| *option_key == key)
        .map(|(_, label)| *label)
}

#[function_component(CalculatorForm)]
pub fn calculator_form() -> Html {
    let session = use_reducer(FormSession::new);
    let result_dismissed = use_state(|| false);

    let business_ref = use_node_ref();
    let revenue_ref = use_node_ref();
    let margin_ref = use_node_ref();
    let age_ref = use_node_ref();
    let employees_ref = use_node_ref();
    let step_refs = [
        business_ref,
        revenue_ref,
        margin_ref,
        age_ref,
        employees_ref,
    ];

    // Pending delayed work, cancelled by dropping the handle.
    let auto_advance = use_mut_ref(|| None::<Timeout>);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    // Reads the active step's selector and asks the session to move on.
    let advance_current = {
        let session = session.clone();
        let step_refs = step_refs.clone();
        Callback::from(move |_: ()| {
            let index = session.step as usize - 1;
            if index >= STEPS.len() {
                return;
            }
            match step_refs[index].cast::<HtmlSelectElement>() {
                Some(select) => {
                    session.dispatch(FormAction::Advance {
                        field: STEPS[index].field,
                        value: select.value(),
                    });
                }
                None => {
                    log::error!("calculator: selector for step {} not found", session.step);
                }
            }
        })
    };

    // A chosen option advances the form by itself after a short pause.
    let on_select_change = {
        let advance = advance_current.clone();
        let auto_advance = auto_advance.clone();
        let session = session.clone();
        Callback::from(move |e: Event| {
            let select = match e.target_dyn_into::<HtmlSelectElement>() {
                Some(select) => select,
                None => return,
            };
            if select.value().is_empty() || session.step >= TOTAL_STEPS {
                return;
            }
            let advance = advance.clone();
            *auto_advance.borrow_mut() = Some(Timeout::new(config::AUTO_ADVANCE_MS, move || {
                advance.emit(());
            }));
        })
    };

    // A step change makes any scheduled auto-advance stale; drop it.
    {
        let auto_advance = auto_advance.clone();
        use_effect_with_deps(
            move |_step: &u8| {
                let auto_advance = auto_advance.clone();
                move || {
                    auto_advance.borrow_mut().take();
                }
            },
            session.step,
        );
    }

    // Each raised notice dismisses itself once its window elapses.
    {
        let notice_seq = session.validation.as_ref().map(|notice| notice.seq);
        let session = session.clone();
        let dismiss_timer = dismiss_timer.clone();
        use_effect_with_deps(
            move |seq: &Option<u32>| {
                dismiss_timer.borrow_mut().take();
                if seq.is_some() {
                    let session = session.clone();
                    *dismiss_timer.borrow_mut() =
                        Some(Timeout::new(config::VALIDATION_DISMISS_MS, move || {
                            session.dispatch(FormAction::DismissValidation);
                        }));
                }
                let dismiss_timer = dismiss_timer.clone();
                move || {
                    dismiss_timer.borrow_mut().take();
                }
            },
            notice_seq,
        );
    }

    let on_next = {
        let advance = advance_current.clone();
        let auto_advance = auto_advance.clone();
        Callback::from(move |_: MouseEvent| {
            auto_advance.borrow_mut().take();
            advance.emit(());
        })
    };

    let on_prev = {
        let session = session.clone();
        let auto_advance = auto_advance.clone();
        Callback::from(move |_: MouseEvent| {
            auto_advance.borrow_mut().take();
            session.dispatch(FormAction::Retreat);
        })
    };

    let on_submit = {
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            session.dispatch(FormAction::Submit);
        })
    };

    let review_open = session.step == TOTAL_STEPS;

    html! {
        <div class="calculator-form-wrap">
            <style>{FORM_CSS}</style>
            <form id="calculatorForm" class="calculator-form" onsubmit={on_submit}>
                <div class="step-indicator">
                    {"Step "}
                    <span class="current-step">{ session.step.to_string() }</span>
                    { format!(" of {}", TOTAL_STEPS) }
                </div>
                { for STEPS.iter().enumerate().map(|(index, def)| {
                    let active = session.step as usize == index + 1;
                    html! {
                        <div class={classes!("form-step", active.then(|| "active"))}>
                            <label class="step-prompt" for={def.field}>{ def.prompt }</label>
                            <select
                                id={def.field}
                                name={def.field}
                                class="form-select"
                                ref={step_refs[index].clone()}
                                onchange={on_select_change.clone()}
                            >
                                <option value="" selected={session.answer(def.field).is_none()}>
                                    {"Choose an option"}
                                </option>
                                { for def.options.iter().map(|(key, label)| html! {
                                    <option
                                        value={*key}
                                        selected={session.answer(def.field) == Some(*key)}
                                    >
                                        {*label}
                                    </option>
                                }) }
                            </select>
                            {
                                if active {
                                    if let Some(notice) = &session.validation {
                                        html! {
                                            <div class="validation-message">{ notice.message }</div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }) }
                <div class={classes!("form-step", review_open.then(|| "active"))}>
                    <label class="step-prompt">{"Review your answers"}</label>
                    <ul class="review-list">
                        { for STEPS.iter().map(|def| html! {
                            <li>
                                <span class="review-question">{ def.prompt }</span>
                                <span class="review-answer">
                                    {
                                        session
                                            .answer(def.field)
                                            .and_then(|key| option_label(def, key))
                                            .unwrap_or("Not answered")
                                    }
                                </span>
                            </li>
                        }) }
                    </ul>
                    <p class="review-note">
                        {"The result is an indicative estimate, not a financing decision."}
                    </p>
                </div>
                <div class="form-nav">
                    <button
                        type="button"
                        id="prevStep"
                        class="form-nav-button"
                        disabled={session.step == 1}
                        onclick={on_prev}
                    >
                        {"Back"}
                    </button>
                    {
                        if review_open {
                            html! {
                                <div class="form-submit-container">
                                    <button
                                        type="submit"
                                        class="form-submit-button"
                                        disabled={session.is_submitted()}
                                    >
                                        {"Calculate my eligibility"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {
                                <button
                                    type="button"
                                    id="nextStep"
                                    class="form-nav-button primary"
                                    onclick={on_next}
                                >
                                    {"Next"}
                                </button>
                            }
                        }
                    }
                </div>
            </form>
            {
                if !*result_dismissed {
                    if let Some(result) = &session.result {
                        let on_close = {
                            let result_dismissed = result_dismissed.clone();
                            Callback::from(move |_| result_dismissed.set(true))
                        };
                        html! {
                            <ResultModal
                                percentage={result.percentage}
                                message={result.tier.message()}
                                {on_close}
                            />
                        }
                    } else {
                        html! {}
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const FORM_CSS: &str = r#"
    .calculator-form-wrap {
        max-width: 560px;
        margin: 0 auto;
    }

    .calculator-form {
        background: #ffffff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 12px 40px rgba(44, 62, 80, 0.12);
    }

    .step-indicator {
        color: #6c757d;
        font-size: 0.9rem;
        margin-bottom: 1.5rem;
    }

    .step-indicator .current-step {
        color: #667eea;
        font-weight: 700;
    }

    .form-step {
        display: none;
    }

    .form-step.active {
        display: block;
        animation: step-in 0.5s cubic-bezier(0.215, 0.61, 0.355, 1);
    }

    @keyframes step-in {
        from {
            opacity: 0;
            transform: translateY(20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .step-prompt {
        display: block;
        font-size: 1.15rem;
        font-weight: 600;
        color: #2c3e50;
        margin-bottom: 1rem;
    }

    .form-select {
        width: 100%;
        padding: 0.85rem 1rem;
        border: 1px solid #dee2e6;
        border-radius: 0.5rem;
        font-size: 1rem;
        color: #2c3e50;
        background: #f8f9fa;
    }

    .form-select:focus {
        outline: none;
        border-color: #667eea;
    }

    .validation-message {
        background: #ff6b6b;
        color: white;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        margin: 1rem 0;
        text-align: center;
        font-weight: 500;
        animation: notice-in 0.3s ease;
    }

    @keyframes notice-in {
        from {
            opacity: 0;
            transform: translateY(-10px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .review-list {
        list-style: none;
        padding: 0;
        margin: 0 0 1rem;
    }

    .review-list li {
        display: flex;
        justify-content: space-between;
        gap: 1rem;
        padding: 0.6rem 0;
        border-bottom: 1px solid #f1f3f5;
    }

    .review-question {
        color: #6c757d;
        font-size: 0.9rem;
    }

    .review-answer {
        color: #2c3e50;
        font-weight: 600;
        text-align: right;
    }

    .review-note {
        color: #6c757d;
        font-size: 0.85rem;
        margin-bottom: 0;
    }

    .form-nav {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-top: 1.5rem;
    }

    .form-nav-button {
        background: #f1f3f5;
        color: #2c3e50;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-weight: 600;
    }

    .form-nav-button:disabled {
        opacity: 0.5;
        cursor: default;
    }

    .form-nav-button.primary {
        display: inline-flex;
        background: #667eea;
        color: white;
    }

    .form-submit-button {
        background: #28a745;
        color: white;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        font-weight: 600;
    }
"#;
