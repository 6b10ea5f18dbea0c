use web_sys::MouseEvent;
use yew::prelude::*;

use crate::theme::{ResolvedTheme, ThemeContext};

/// Glyph for the theme a click switches to.
pub fn toggle_icon(resolved: ResolvedTheme) -> &'static str {
    match resolved {
        ResolvedTheme::Dark => "☀",
        ResolvedTheme::Light => "☾",
    }
}

/// Flips between light and dark, starting from whichever is currently shown.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let ctx = use_context::<ThemeContext>();
    let Some(ctx) = ctx else {
        log::warn!("ThemeToggle rendered outside ThemeProvider");
        return html! {};
    };

    let onclick = {
        let set_theme = ctx.set_theme.clone();
        let resolved = ctx.resolved;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            set_theme.emit(resolved.toggled());
        })
    };

    let icon = toggle_icon(ctx.resolved);

    html! {
        <button class="theme-toggle" aria-label="Toggle theme" {onclick}>
            <span aria-hidden="true">{ icon }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn icon_shows_the_theme_a_click_switches_to() {
        assert_eq!(toggle_icon(ResolvedTheme::Dark), "☀");
        assert_eq!(ResolvedTheme::Dark.toggled(), Theme::Light);
        assert_eq!(toggle_icon(ResolvedTheme::Light), "☾");
        assert_eq!(ResolvedTheme::Light.toggled(), Theme::Dark);
    }
}
