use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod calculator {
    pub mod form;
    pub mod result;
    pub mod scoring;
    pub mod session;
}
mod components {
    pub mod card_nav;
    pub mod contact;
    pub mod dock;
    pub mod hero;
    pub mod splash;
    pub mod typewriter;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, falling back to the landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
