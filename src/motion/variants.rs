//! Named animation states as plain data.
//!
//! A [`Variant`] pairs a hidden and a shown [`Pose`] with a [`Transition`].
//! Components ask it for inline styles; the browser's CSS transitions do the
//! interpolation, with spring curves exported through `linear()`.

use super::spring::{Spring, SpringConfig};

/// Points used when a spring curve is exported as a CSS `linear()` easing.
const SPRING_CSS_SAMPLES: usize = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    Spring(SpringConfig),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Easing::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)".to_string(),
            Easing::Spring(config) => {
                let points: Vec<String> = spring_samples(*config)
                    .into_iter()
                    .map(|p| format!("{p:.4}"))
                    .collect();
                format!("linear({})", points.join(", "))
            }
        }
    }
}

/// Progress at evenly spaced points of the settle time, endpoints pinned.
fn spring_samples(config: SpringConfig) -> Vec<f64> {
    let settle = config.settle_time();
    (0..=SPRING_CSS_SAMPLES)
        .map(|i| match i {
            0 => 0.0,
            SPRING_CSS_SAMPLES => 1.0,
            _ => spring_progress(config, settle * i as f64 / SPRING_CSS_SAMPLES as f64),
        })
        .collect()
}

/// Position of a unit spring released from 0 toward 1 after `seconds`.
fn spring_progress(config: SpringConfig, seconds: f64) -> f64 {
    let mut spring = Spring::new(config, 0.0);
    spring.set_target(1.0);
    let frame = 1.0 / 60.0;
    let mut remaining = seconds;
    while remaining > 0.0 {
        spring.step(remaining.min(frame));
        remaining -= frame;
    }
    spring.value()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn timed(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    /// Duration is derived from how long the spring takes to settle.
    pub const fn spring(config: SpringConfig) -> Self {
        Self {
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::Spring(config),
        }
    }

    pub fn effective_duration_ms(&self) -> f64 {
        match self.easing {
            Easing::Spring(config) => (config.settle_time() * 1000.0).round(),
            _ => self.duration_ms,
        }
    }
}

/// Visual properties an entrance animation moves between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden(offset_y: f64, scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            offset_y,
            scale,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d(0, {}px, 0) scale({});",
            self.opacity, self.offset_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantState {
    Hidden,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub shown: Pose,
    pub transition: Transition,
}

impl Variant {
    pub const FADE_IN: Variant = Variant {
        hidden: Pose::hidden(0.0, 1.0),
        shown: Pose::REST,
        transition: Transition::timed(600.0, Easing::EaseOut),
    };

    pub const FADE_IN_UP: Variant = Variant {
        hidden: Pose::hidden(20.0, 1.0),
        shown: Pose::REST,
        transition: Transition::timed(600.0, Easing::EaseOut),
    };

    pub const ZOOM_IN: Variant = Variant {
        hidden: Pose::hidden(0.0, 0.95),
        shown: Pose::REST,
        transition: Transition::timed(600.0, Easing::EaseOut),
    };

    pub const SPRING_UP: Variant = Variant {
        hidden: Pose::hidden(16.0, 1.0),
        shown: Pose::REST,
        transition: Transition::spring(SpringConfig::new(120.0, 18.0, 1.0)),
    };

    /// Per-character headline reveal.
    pub const CHAR_UP: Variant = Variant {
        hidden: Pose::hidden(18.0, 1.0),
        shown: Pose::REST,
        transition: Transition::spring(SpringConfig::new(320.0, 22.0, 1.0)),
    };

    pub const ITEM: Variant = Variant {
        hidden: Pose::hidden(20.0, 1.0),
        shown: Pose::REST,
        transition: Transition::timed(500.0, Easing::EaseOut),
    };

    pub fn pose(&self, state: VariantState) -> Pose {
        match state {
            VariantState::Hidden => self.hidden,
            VariantState::Shown => self.shown,
        }
    }

    /// Inline style for `state`. `extra_delay_ms` is the element's stagger offset.
    pub fn style(&self, state: VariantState, extra_delay_ms: f64) -> String {
        let pose = self.pose(state).css();
        match state {
            VariantState::Hidden => pose,
            VariantState::Shown => {
                let duration = self.transition.effective_duration_ms();
                let delay = self.transition.delay_ms + extra_delay_ms;
                let easing = self.transition.easing.css();
                format!(
                    "{pose} transition: opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms;"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_samples_are_pinned_and_rise() {
        let samples = spring_samples(SpringConfig::new(120.0, 18.0, 1.0));
        assert_eq!(samples.len(), SPRING_CSS_SAMPLES + 1);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[SPRING_CSS_SAMPLES], 1.0);
        assert!(samples[1] > 0.0);
        assert!(samples[SPRING_CSS_SAMPLES / 2] > 0.5);
    }

    #[test]
    fn timed_easings_map_to_css_keywords() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert!(Easing::EaseOut.css().starts_with("cubic-bezier("));
    }

    #[test]
    fn spring_easing_exports_a_linear_curve() {
        let css = Easing::Spring(SpringConfig::new(320.0, 22.0, 1.0)).css();
        assert!(css.starts_with("linear(0.0000, "));
        assert!(css.ends_with("1.0000)"));
        assert_eq!(css.matches(',').count(), SPRING_CSS_SAMPLES);
    }

    #[test]
    fn shown_style_carries_the_transition() {
        let style = Variant::ITEM.style(VariantState::Shown, 300.0);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("opacity 500ms cubic-bezier(0.33, 1, 0.68, 1) 300ms"));
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let style = Variant::ZOOM_IN.style(VariantState::Hidden, 0.0);
        assert_eq!(
            style,
            "opacity: 0; transform: translate3d(0, 0px, 0) scale(0.95);"
        );
    }

    #[test]
    fn spring_variant_has_a_finite_duration() {
        let duration = Variant::SPRING_UP.transition.effective_duration_ms();
        assert!(duration > 100.0 && duration < 3000.0);
    }
}
