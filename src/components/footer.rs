use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container site-footer__row">
                <div class="site-footer__brand">
                    <span class="brand__mark">{"Z"}</span>
                    <span>{ format!("© {} {}. All rights reserved.", year, config::SITE_NAME) }</span>
                </div>
                <nav class="site-footer__links">
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                    <a href="/pricing#faq">{"FAQ"}</a>
                </nav>
            </div>
        </footer>
    }
}
