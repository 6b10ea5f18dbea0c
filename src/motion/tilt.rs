use super::pointer::PointerSignal;
use super::spring::{SpringConfig, SpringPair};

/// Rotation in degrees around the element's X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltAngles {
    pub const ZERO: TiltAngles = TiltAngles {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };
}

/// Maps a normalized pointer position to a tilt.
///
/// The center yields no rotation, the edges yield `max` degrees. The top edge
/// tips toward the viewer (positive X), the right edge turns away (positive Y).
pub fn tilt_for(px: f64, py: f64, max: f64) -> TiltAngles {
    let px = px.clamp(0.0, 1.0);
    let py = py.clamp(0.0, 1.0);
    TiltAngles {
        rotate_x: (0.5 - py) * max * 2.0,
        rotate_y: (px - 0.5) * max * 2.0,
    }
}

/// Translation that pulls an element toward the pointer, at most `max / 2` per axis.
pub fn magnetic_offset(px: f64, py: f64, max: f64) -> (f64, f64) {
    let px = px.clamp(0.0, 1.0);
    let py = py.clamp(0.0, 1.0);
    ((px - 0.5) * max, (py - 0.5) * max)
}

/// How a [`PointerFollower`] turns pointer positions into targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FollowMode {
    /// 3D rotation in degrees.
    Tilt { max_deg: f64 },
    /// 2D translation in pixels.
    Magnetic { max_px: f64 },
}

/// Spring-smoothed response of one element to the pointer.
///
/// With reduced motion enabled every input is ignored and the output stays at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerFollower {
    mode: FollowMode,
    springs: SpringPair,
    reduced_motion: bool,
}

impl PointerFollower {
    pub fn new(mode: FollowMode, config: SpringConfig, reduced_motion: bool) -> Self {
        Self {
            mode,
            springs: SpringPair::new(config, (0.0, 0.0)),
            reduced_motion,
        }
    }

    pub fn tilt(max_deg: f64, config: SpringConfig, reduced_motion: bool) -> Self {
        Self::new(FollowMode::Tilt { max_deg }, config, reduced_motion)
    }

    pub fn magnetic(max_px: f64, config: SpringConfig, reduced_motion: bool) -> Self {
        Self::new(FollowMode::Magnetic { max_px }, config, reduced_motion)
    }

    /// Feeds a tracker signal. `Move` samples must be normalized.
    pub fn apply(&mut self, signal: PointerSignal) {
        if self.reduced_motion {
            return;
        }
        let target = match signal {
            PointerSignal::Move(sample) => match self.mode {
                FollowMode::Tilt { max_deg } => {
                    let angles = tilt_for(sample.x, sample.y, max_deg);
                    (angles.rotate_x, angles.rotate_y)
                }
                FollowMode::Magnetic { max_px } => magnetic_offset(sample.x, sample.y, max_px),
            },
            PointerSignal::Leave => (0.0, 0.0),
        };
        self.springs.set_target(target);
    }

    /// Advances the springs. Returns `true` while another frame is needed.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.reduced_motion {
            return false;
        }
        self.springs.step(dt)
    }

    /// Current smoothed output: degrees `(rotateX, rotateY)` or pixels `(x, y)`.
    pub fn current(&self) -> (f64, f64) {
        if self.reduced_motion {
            return (0.0, 0.0);
        }
        self.springs.value()
    }

    pub fn target(&self) -> (f64, f64) {
        self.springs.target()
    }

    pub fn angles(&self) -> TiltAngles {
        let (rotate_x, rotate_y) = self.current();
        TiltAngles { rotate_x, rotate_y }
    }

    /// CSS `transform` for the current output.
    pub fn css_transform(&self, perspective_px: u32) -> String {
        match self.mode {
            FollowMode::Tilt { .. } => {
                let TiltAngles { rotate_x, rotate_y } = self.angles();
                format!("perspective({perspective_px}px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)")
            }
            FollowMode::Magnetic { .. } => {
                let (x, y) = self.current();
                format!("translate3d({x:.2}px, {y:.2}px, 0)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::pointer::PointerSample;

    const MAX: f64 = 12.0;
    const FRAME: f64 = 1.0 / 60.0;

    fn config() -> SpringConfig {
        SpringConfig::new(220.0, 20.0, 0.5)
    }

    #[test]
    fn center_has_no_rotation() {
        assert_eq!(tilt_for(0.5, 0.5, MAX), TiltAngles::ZERO);
    }

    #[test]
    fn rotation_is_bounded_inside_the_element() {
        let steps = 20;
        for i in 0..=steps {
            for j in 0..=steps {
                let px = i as f64 / steps as f64;
                let py = j as f64 / steps as f64;
                let angles = tilt_for(px, py, MAX);
                assert!(angles.rotate_x.abs() <= MAX + 1e-9);
                assert!(angles.rotate_y.abs() <= MAX + 1e-9);
            }
        }
    }

    #[test]
    fn edges_reach_the_maximum() {
        let top_left = tilt_for(0.0, 0.0, MAX);
        assert_eq!(top_left.rotate_x, MAX);
        assert_eq!(top_left.rotate_y, -MAX);

        let bottom_right = tilt_for(1.0, 1.0, MAX);
        assert_eq!(bottom_right.rotate_x, -MAX);
        assert_eq!(bottom_right.rotate_y, MAX);
    }

    #[test]
    fn magnetic_offset_follows_the_pointer() {
        assert_eq!(magnetic_offset(0.5, 0.5, MAX), (0.0, 0.0));
        assert_eq!(magnetic_offset(1.0, 0.0, MAX), (6.0, -6.0));
    }

    #[test]
    fn leave_springs_back_to_rest() {
        let mut follower = PointerFollower::tilt(MAX, config(), false);
        follower.apply(PointerSignal::Move(PointerSample::new(1.0, 0.0)));
        for _ in 0..30 {
            follower.step(FRAME);
        }
        let (rx, ry) = follower.current();
        assert!(rx > 0.0 && ry > 0.0);

        follower.apply(PointerSignal::Leave);
        assert_eq!(follower.target(), (0.0, 0.0));

        let mut frames = 0;
        while follower.step(FRAME) {
            frames += 1;
            assert!(frames < 600, "tilt never came back to rest");
        }
        let (rx, ry) = follower.current();
        assert!(rx.abs() < 0.01 && ry.abs() < 0.01);
    }

    #[test]
    fn leave_is_smooth_not_a_snap() {
        let mut follower = PointerFollower::tilt(MAX, config(), false);
        follower.apply(PointerSignal::Move(PointerSample::new(1.0, 0.5)));
        for _ in 0..120 {
            follower.step(FRAME);
        }
        let before = follower.angles().rotate_y;
        follower.apply(PointerSignal::Leave);
        follower.step(FRAME);
        let after = follower.angles().rotate_y;
        assert!(after > 0.0 && after < before);
    }

    #[test]
    fn reduced_motion_stays_flat() {
        let mut follower = PointerFollower::tilt(MAX, config(), true);
        follower.apply(PointerSignal::Move(PointerSample::new(0.0, 0.0)));
        assert!(!follower.step(FRAME));
        assert_eq!(follower.angles(), TiltAngles::ZERO);
        assert_eq!(
            follower.css_transform(900),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn magnetic_transform_is_a_translation() {
        let mut follower = PointerFollower::magnetic(MAX, SpringConfig::new(260.0, 18.0, 1.0), false);
        follower.apply(PointerSignal::Move(PointerSample::new(1.0, 1.0)));
        assert_eq!(follower.target(), (6.0, 6.0));
        assert!(follower.css_transform(0).starts_with("translate3d("));
    }
}
