use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="page not-found">
            <section class="section page-hero">
                <Reveal class="container container--narrow text-center" threshold={0.0}>
                    <h1 class="page-title">{"404"}</h1>
                    <p class="muted lead">{"This page wandered off. Let's get you back on track."}</p>
                    <div class="button-row">
                        <Link<Route> to={Route::Home} classes="btn btn--primary">{"Back home"}</Link<Route>>
                    </div>
                </Reveal>
            </section>
        </main>
    }
}
