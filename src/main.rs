use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod count_up;
mod hooks;
mod progress;
mod reveal;
mod viewport;
mod components {
    pub mod counter;
    pub mod reveal;
}
mod pages {
    pub mod admission;
    pub mod colleges;
    pub mod counselling;
    pub mod documentation;
    pub mod footer;
    pub mod hero;
    pub mod index;
    pub mod mistakes;
    pub mod webinars;
}

use config::SiteConfig;
use pages::index::Index;


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
            info!("Rendering Home page");
            html! { <Index /> }
        },
        // Single page site: anything else gets the same page.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Index /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let config = use_state(SiteConfig::load);

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
