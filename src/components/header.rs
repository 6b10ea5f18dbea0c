use gloo_events::EventListener;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::Route;

const SCROLLED_AFTER_PX: f64 = 8.0;

const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Pricing, "Pricing"),
];

/// Whether the header should switch to its compact, shadowed look.
pub fn past_scroll_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let target = window.clone();
                    EventListener::new(&target, "scroll", move |_| {
                        is_scrolled.set(past_scroll_threshold(window.scroll_y().unwrap_or(0.0)));
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <div class="container site-header__row">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand__mark">{"Z"}</span>
                    <span>{ config::SITE_NAME }</span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("site-nav", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">{ *label }</Link<Route>>
                        </div>
                    }) }
                </nav>

                <div class="site-header__actions">
                    <ThemeToggle />
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="btn btn--secondary btn--sm">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_state_follows_position_both_ways() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(SCROLLED_AFTER_PX));
        assert!(past_scroll_threshold(100.0));
        // back at the top the header drops the scrolled look again
        assert!(!past_scroll_threshold(0.0));
    }
}
