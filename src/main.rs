use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod pricing;
mod theme;

mod motion {
    pub mod frame;
    pub mod pointer;
    pub mod preference;
    pub mod reveal;
    pub mod scroll;
    pub mod spring;
    pub mod tilt;
    pub mod variants;
}

mod components {
    pub mod faq;
    pub mod footer;
    pub mod globe;
    pub mod header;
    pub mod magnetic;
    pub mod reveal;
    pub mod sections;
    pub mod spotlight;
    pub mod theme_toggle;
    pub mod tilt;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
    pub mod services;
}

use components::{footer::SiteFooter, header::SiteHeader, spotlight::CursorSpotlight};
use motion::preference::MotionPreference;
use pages::{
    about::About, contact::Contact, home::Home, not_found::NotFound, pricing::Pricing,
    services::Services,
};
use theme::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/pricing")]
    Pricing,
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
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // read once per load; every animated component takes it from context
    let motion = use_state(MotionPreference::detect);

    html! {
        <ContextProvider<MotionPreference> context={*motion}>
            <ThemeProvider>
                <BrowserRouter>
                    <SiteHeader />
                    <Switch<Route> render={switch} />
                    <SiteFooter />
                </BrowserRouter>
                <CursorSpotlight />
            </ThemeProvider>
        </ContextProvider<MotionPreference>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
