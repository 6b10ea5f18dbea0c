use web_sys::window;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The user's OS-level motion preference, read once at startup and handed to
/// every animated component through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub const FULL: MotionPreference = MotionPreference { reduced: false };

    /// Whether pointer listeners should be attached at all.
    pub fn follows_pointer(self) -> bool {
        !self.reduced
    }

    pub fn detect() -> Self {
        match media_matches(REDUCED_MOTION_QUERY) {
            Some(reduced) => {
                log::debug!("reduced motion preference: {}", reduced);
                Self { reduced }
            }
            None => {
                log::warn!("matchMedia unavailable, assuming full motion");
                Self::FULL
            }
        }
    }
}

/// `None` when the media query API is not available.
pub fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_attaches_no_pointer_listeners() {
        assert!(MotionPreference::FULL.follows_pointer());
        assert!(!MotionPreference { reduced: true }.follows_pointer());
        assert!(MotionPreference::default().follows_pointer());
    }
}
