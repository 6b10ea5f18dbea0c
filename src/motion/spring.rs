//! Damped spring used to smooth pointer-driven values.
//!
//! A [`Spring`] owns one scalar. Callers move its target whenever input
//! arrives and call [`Spring::step`] once per animation frame until it
//! reports that it has settled.

/// Longest frame we integrate in one go. A tab coming back from the
/// background can report several seconds of elapsed time.
const MAX_FRAME_DT: f64 = 0.064;
/// Integration sub-step, keeps stiff presets stable at low frame rates.
const SUBSTEP_DT: f64 = 1.0 / 240.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Time in seconds for a unit displacement to come to rest, simulated at 60fps.
    /// Used to turn spring transitions into CSS durations.
    pub fn settle_time(&self) -> f64 {
        let mut spring = Spring::new(*self, 0.0);
        spring.set_target(1.0);
        let mut elapsed = 0.0;
        loop {
            elapsed += 1.0 / 60.0;
            if !spring.step(1.0 / 60.0) || elapsed >= 10.0 {
                return elapsed;
            }
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    current: f64,
    target: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            current: initial,
            target: initial,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advances the spring by `dt` seconds. Returns `true` while it still needs frames.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.current == self.target && self.velocity == 0.0 {
            return false;
        }

        let mut remaining = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let mass = mass.max(f64::EPSILON);

        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_DT);
            let displacement = self.current - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.current += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.current = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Two independent springs driven together, one per screen axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringPair {
    pub x: Spring,
    pub y: Spring,
}

impl SpringPair {
    pub fn new(config: SpringConfig, initial: (f64, f64)) -> Self {
        Self {
            x: Spring::new(config, initial.0),
            y: Spring::new(config, initial.1),
        }
    }

    pub fn set_target(&mut self, (x, y): (f64, f64)) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn value(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn target(&self) -> (f64, f64) {
        (self.x.target(), self.y.target())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn step(&mut self, dt: f64) -> bool {
        // Both axes must advance even if the first one is already at rest.
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if !spring.step(FRAME) {
                return frame;
            }
        }
        max_frames
    }

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(SpringConfig::new(300.0, 40.0, 0.6), 0.0);
        spring.set_target(500.0);

        let frames = run_until_settled(&mut spring, 600);

        assert!(frames < 600, "spring never settled");
        assert_eq!(spring.value(), 500.0);
        assert_eq!(spring.velocity, 0.0);
    }

    #[test]
    fn settled_spring_does_no_work() {
        let mut spring = Spring::new(SpringConfig::default(), 3.0);
        assert!(spring.is_settled());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 3.0);
    }

    #[test]
    fn new_target_wakes_a_resting_spring() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        assert!(!spring.step(FRAME));

        spring.set_target(10.0);
        assert!(!spring.is_settled());
        assert!(spring.step(FRAME));
        assert!(spring.value() > 0.0);
    }

    #[test]
    fn moves_toward_target_on_first_frame() {
        let mut spring = Spring::new(SpringConfig::new(220.0, 20.0, 0.5), 0.0);
        spring.set_target(-12.0);
        spring.step(FRAME);
        assert!(spring.value() < 0.0);
        assert!(spring.value() > -12.0);
    }

    #[test]
    fn critically_damped_spring_barely_overshoots() {
        // damping == 2 * sqrt(stiffness * mass)
        let config = SpringConfig::new(100.0, 20.0, 1.0);

        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);
        let mut peak: f64 = 0.0;
        for _ in 0..600 {
            spring.step(FRAME);
            peak = peak.max(spring.value());
        }
        assert!(peak <= 101.0, "overshoot too large: {peak}");
    }

    #[test]
    fn huge_frame_gap_is_clamped() {
        let mut spring = Spring::new(SpringConfig::new(400.0, 10.0, 1.0), 0.0);
        spring.set_target(1.0);
        spring.step(30.0);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 2.0);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut spring = Spring::new(SpringConfig::default(), 1.0);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 1.0);
        assert!(!spring.step(f64::INFINITY));
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn pair_keeps_axes_independent() {
        let mut pair = SpringPair::new(SpringConfig::new(300.0, 40.0, 0.6), (0.0, 0.0));
        pair.set_target((100.0, 0.0));
        pair.step(FRAME);
        let (x, y) = pair.value();
        assert!(x > 0.0);
        assert_eq!(y, 0.0);
        assert!(pair.y.is_settled());
        assert!(!pair.is_settled());
    }

    #[test]
    fn settle_time_is_bounded() {
        let t = SpringConfig::new(120.0, 18.0, 1.0).settle_time();
        assert!(t > 0.1 && t < 3.0, "unexpected settle time {t}");
    }
}
