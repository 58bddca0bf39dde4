use yew::prelude::*;
use web_sys::{
    window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::calculator::form::CalculatorForm;
use crate::components::card_nav::CardNav;
use crate::components::contact::ContactModal;
use crate::components::dock::MobileDock;
use crate::components::hero::Hero;
use crate::components::splash::Splash;

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(id: &str) {
    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::error!("scroll target #{id} not found"),
    }
}

struct ArticleDef {
    tag: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const ARTICLES: [ArticleDef; 3] = [
    ArticleDef {
        tag: "Basics",
        title: "How lenders read your revenue",
        blurb: "What the brackets on an application actually signal, and why steady beats spectacular.",
    },
    ArticleDef {
        tag: "Preparation",
        title: "Five ways to raise your funding odds",
        blurb: "Small changes to margins, records and team structure that move an application forward.",
    },
    ArticleDef {
        tag: "Products",
        title: "Choosing between financing products",
        blurb: "Working capital, growth financing or something else: matching the product to the need.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_contact = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_| show_contact.set(true))
    };
    let close_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_| show_contact.set(false))
    };

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <Splash />
            <CardNav on_contact={open_contact.clone()} />
            <Hero />
            <section id="calculator" class="calculator-section">
                <div class="section-header">
                    <h2>{"How fundable is your business?"}</h2>
                    <p>{"Answer five quick questions and get an indicative eligibility percentage on the spot."}</p>
                </div>
                <CalculatorForm />
            </section>
            <section id="articles" class="articles-section">
                <div class="section-header">
                    <h2>{"Funding guides"}</h2>
                    <p>{"Short reads for founders preparing an application."}</p>
                </div>
                <div class="article-grid">
                    { for ARTICLES.iter().map(|article| html! {
                        <article class="article-card">
                            <span class="article-tag">{ article.tag }</span>
                            <h3>{ article.title }</h3>
                            <p>{ article.blurb }</p>
                        </article>
                    }) }
                </div>
            </section>
            <footer class="site-footer">
                <p class="footer-brand">{"fundcheck"}</p>
                <p class="footer-note">
                    {"Results are indicative estimates only. Nothing on this page is financial advice."}
                </p>
            </footer>
            <MobileDock on_contact={open_contact} />
            {
                if *show_contact {
                    html! { <ContactModal on_close={close_contact} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .landing-page {
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
        color: #2c3e50;
        background: #f5f6fa;
    }

    .section-header {
        max-width: 720px;
        margin: 0 auto 2.5rem;
        text-align: center;
    }

    .section-header h2 {
        font-size: 2rem;
        margin: 0 0 0.75rem;
    }

    .section-header p {
        color: #6c757d;
        margin: 0;
        line-height: 1.6;
    }

    .calculator-section {
        padding: 5rem 1.5rem;
    }

    .articles-section {
        padding: 5rem 1.5rem;
        background: white;
    }

    .article-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
        max-width: 960px;
        margin: 0 auto;
    }

    .article-card {
        background: #f8f9fa;
        border-radius: 1rem;
        padding: 1.5rem;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }

    .article-card:hover {
        transform: translateY(-4px);
        box-shadow: 0 12px 30px rgba(44, 62, 80, 0.12);
    }

    .article-tag {
        display: inline-block;
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.08em;
        color: #667eea;
        margin-bottom: 0.5rem;
    }

    .article-card h3 {
        margin: 0 0 0.5rem;
        font-size: 1.15rem;
    }

    .article-card p {
        margin: 0;
        color: #6c757d;
        line-height: 1.6;
    }

    .site-footer {
        padding: 3rem 1.5rem 5rem;
        text-align: center;
    }

    .footer-brand {
        font-weight: 700;
        margin: 0 0 0.5rem;
    }

    .footer-note {
        color: #6c757d;
        font-size: 0.85rem;
        margin: 0;
    }
"#;
