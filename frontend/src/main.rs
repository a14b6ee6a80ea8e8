use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod error;
mod nav;
mod scroll;
mod services;
mod pages {
    pub mod home;
    pub mod services;
    pub mod contact;
    pub mod not_found;
}
mod components {
    pub mod contact_embed;
    pub mod footer;
    pub mod reveal;
    pub mod service_card;
}

use pages::{
    home::Home,
    services::{ServicesIndex, ServiceDetail},
    contact::Contact,
    not_found::NotFound,
};

use components::{
    footer::Footer,
    reveal::REVEAL_CSS,
    service_card::SERVICE_CARD_CSS,
};

use nav::Nav;
use scroll::use_scrolled;
use services::SERVICES;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesIndex /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail slug={slug} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let scrolled = use_scrolled();

    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0c1220;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                "#}
                {REVEAL_CSS}
                {SERVICE_CARD_CSS}
            </style>
            <Nav scrolled={scrolled} services={SERVICES} />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer services={SERVICES} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
