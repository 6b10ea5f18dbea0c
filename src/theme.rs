use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::motion::preference::media_matches;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThemeError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("local storage error: {0}")]
    Storage(String),
}

/// Stored preference. `System` follows the OS color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// What is actually painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Theme> {
        serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase())).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if system_prefers_dark => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }
}

impl ResolvedTheme {
    /// The explicit theme a toggle switches to.
    pub fn toggled(self) -> Theme {
        match self {
            ResolvedTheme::Light => Theme::Dark,
            ResolvedTheme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }

    pub fn spotlight(self) -> SpotlightPalette {
        match self {
            ResolvedTheme::Light => SpotlightPalette {
                radius_px: 280,
                alpha: 0.32,
                blend_mode: None,
                z_index: 70,
            },
            // softer, blended so it does not overpower dark backgrounds
            ResolvedTheme::Dark => SpotlightPalette {
                radius_px: 260,
                alpha: 0.20,
                blend_mode: Some("soft-light"),
                z_index: 60,
            },
        }
    }
}

/// Color parameters of the cursor spotlight for one presentation context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightPalette {
    pub radius_px: u32,
    pub alpha: f64,
    pub blend_mode: Option<&'static str>,
    pub z_index: i32,
}

impl SpotlightPalette {
    const RGB: (u8, u8, u8) = (56, 189, 248);

    pub fn gradient(&self, x: f64, y: f64) -> String {
        let (r, g, b) = Self::RGB;
        format!(
            "radial-gradient({radius}px {radius}px at {x:.1}px {y:.1}px, rgba({r},{g},{b},{alpha:.2}), transparent 60%)",
            radius = self.radius_px,
            alpha = self.alpha,
        )
    }

    /// Static part of the overlay style; the gradient is written per frame.
    pub fn layer_style(&self) -> String {
        let blend = self
            .blend_mode
            .map(|mode| format!(" mix-blend-mode: {mode};"))
            .unwrap_or_default();
        format!(
            "position: fixed; inset: 0; pointer-events: none; z-index: {};{}",
            self.z_index, blend
        )
    }
}

pub fn system_prefers_dark() -> bool {
    media_matches(DARK_SCHEME_QUERY).unwrap_or(false)
}

fn storage() -> Result<web_sys::Storage, ThemeError> {
    window()
        .ok_or(ThemeError::StorageUnavailable)?
        .local_storage()
        .map_err(|e| ThemeError::Storage(format!("{:?}", e)))?
        .ok_or(ThemeError::StorageUnavailable)
}

pub fn load_theme() -> Result<Theme, ThemeError> {
    let stored = storage()?
        .get_item(config::THEME_STORAGE_KEY)
        .map_err(|e| ThemeError::Storage(format!("{:?}", e)))?;
    Ok(stored.as_deref().and_then(Theme::parse).unwrap_or_default())
}

pub fn store_theme(theme: Theme) -> Result<(), ThemeError> {
    storage()?
        .set_item(config::THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
}

/// Mirrors the resolved theme onto `<html class="dark">` for the stylesheet.
pub fn apply_to_document(resolved: ResolvedTheme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if resolved.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        log::warn!("could not update document theme class");
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub resolved: ResolvedTheme,
    pub set_theme: Callback<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        load_theme().unwrap_or_else(|e| {
            log::warn!("using default theme: {}", e);
            Theme::default()
        })
    });
    let resolved = theme.resolve(system_prefers_dark());

    use_effect_with_deps(
        move |resolved| {
            apply_to_document(*resolved);
            || ()
        },
        resolved,
    );

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            log::debug!("theme -> {}", next.as_str());
            if let Err(e) = store_theme(next) {
                log::warn!("theme not persisted: {}", e);
            }
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        resolved,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_names() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn names_round_trip_through_as_str() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn system_follows_the_os() {
        assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
    }

    #[test]
    fn toggle_picks_the_opposite_of_what_is_shown() {
        assert_eq!(ResolvedTheme::Dark.toggled(), Theme::Light);
        assert_eq!(ResolvedTheme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn palettes_differ_per_theme() {
        let light = ResolvedTheme::Light.spotlight();
        let dark = ResolvedTheme::Dark.spotlight();
        assert_eq!(
            light.gradient(10.0, 20.0),
            "radial-gradient(280px 280px at 10.0px 20.0px, rgba(56,189,248,0.32), transparent 60%)"
        );
        assert!(dark.gradient(0.0, 0.0).contains("rgba(56,189,248,0.20)"));
        assert!(dark.layer_style().contains("mix-blend-mode: soft-light"));
        assert!(light.layer_style().contains("pointer-events: none"));
        assert!(!light.layer_style().contains("mix-blend-mode"));
    }
}
