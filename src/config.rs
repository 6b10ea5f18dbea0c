use log::Level;

use crate::motion::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "Zemenay";
pub const CONTACT_EMAIL: &str = "hello@zemenay.com";

// Pointer-following layers
pub const SPOTLIGHT_SPRING: SpringConfig = SpringConfig::new(300.0, 40.0, 0.6);
pub const HERO_TILT_SPRING: SpringConfig = SpringConfig::new(220.0, 20.0, 0.5);
pub const MAGNETIC_SPRING: SpringConfig = SpringConfig::new(260.0, 18.0, 1.0);
pub const CARD_TILT_SPRING: SpringConfig = SpringConfig::new(400.0, 40.0, 1.0);

/// Degrees for tilt, pixels for the magnetic button.
pub const TILT_MAX_DEG: f64 = 12.0;
pub const MAGNETIC_MAX_PX: f64 = 12.0;
pub const HERO_PERSPECTIVE_PX: u32 = 900;
pub const CARD_PERSPECTIVE_PX: u32 = 1000;
pub const PARALLAX_MAX_PX: f64 = 60.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_STAGGER_MS: f64 = 100.0;

// Pricing
pub const YEARLY_DISCOUNT: f64 = 0.2;

// Contact form
pub const CONTACT_SEND_DELAY_MS: u32 = 900;

pub const THEME_STORAGE_KEY: &str = "theme";
