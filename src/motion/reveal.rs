//! Once-only entrance animations for elements scrolling into view.

/// Tolerance for visibility ratios reported just under a threshold by the browser.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealEntry {
    pub has_animated: bool,
}

/// Emitted the single time an element crosses the visibility threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub index: usize,
    pub delay_ms: f64,
}

/// Successive delays for a set of elements animating together.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stagger {
    /// Delay before the first element.
    pub delay_children_ms: f64,
    /// Additional delay per position in the set.
    pub stagger_children_ms: f64,
}

impl Stagger {
    pub const NONE: Stagger = Stagger {
        delay_children_ms: 0.0,
        stagger_children_ms: 0.0,
    };

    pub const fn new(delay_children_ms: f64, stagger_children_ms: f64) -> Self {
        Self {
            delay_children_ms,
            stagger_children_ms,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children_ms + self.stagger_children_ms * index as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealSequencer {
    entries: Vec<RevealEntry>,
    threshold: f64,
    stagger: Stagger,
}

impl RevealSequencer {
    pub fn new(len: usize, threshold: f64, stagger: Stagger) -> Self {
        Self {
            entries: vec![RevealEntry::default(); len],
            threshold: threshold.clamp(0.0, 1.0),
            stagger,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reports how much of element `index` is visible.
    ///
    /// Returns a trigger only on the first crossing; exits and re-entries
    /// after that are ignored.
    pub fn observe(&mut self, index: usize, visible_ratio: f64) -> Option<RevealTrigger> {
        let entry = self.entries.get_mut(index)?;
        if entry.has_animated {
            return None;
        }
        let visible = visible_ratio > 0.0 && visible_ratio + RATIO_EPSILON >= self.threshold;
        if !visible {
            return None;
        }
        entry.has_animated = true;
        Some(RevealTrigger {
            index,
            delay_ms: self.stagger.delay_for(index),
        })
    }

    /// Marks every element as revealed without animating (reduced motion).
    pub fn reveal_all(&mut self) {
        for entry in &mut self.entries {
            entry.has_animated = true;
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .map(|entry| entry.has_animated)
            .unwrap_or(false)
    }

    /// Once true, the viewport observer can be disconnected.
    pub fn all_revealed(&self) -> bool {
        self.entries.iter().all(|entry| entry.has_animated)
    }

    pub fn revealed_mask(&self) -> Vec<bool> {
        self.entries.iter().map(|entry| entry.has_animated).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_element() {
        let mut seq = RevealSequencer::new(1, 0.2, Stagger::NONE);

        assert!(seq.observe(0, 0.1).is_none());
        assert!(seq.observe(0, 0.5).is_some());
        // exit, then enter again
        assert!(seq.observe(0, 0.0).is_none());
        assert!(seq.observe(0, 0.9).is_none());
        assert!(seq.observe(0, 1.0).is_none());
        assert!(seq.is_revealed(0));
    }

    #[test]
    fn stagger_follows_position_in_the_set() {
        let mut seq = RevealSequencer::new(4, 0.2, Stagger::new(100.0, 120.0));

        let third = seq.observe(2, 0.3).unwrap();
        assert_eq!(third.index, 2);
        assert_eq!(third.delay_ms, 340.0);

        let first = seq.observe(0, 1.0).unwrap();
        assert_eq!(first.delay_ms, 100.0);
        assert!(!seq.all_revealed());
        assert_eq!(seq.revealed_mask(), vec![true, false, true, false]);
    }

    #[test]
    fn ratio_just_under_threshold_counts() {
        let mut seq = RevealSequencer::new(1, 0.2, Stagger::NONE);
        assert!(seq.observe(0, 0.1999).is_some());
    }

    #[test]
    fn zero_threshold_still_needs_some_visibility() {
        let mut seq = RevealSequencer::new(1, 0.0, Stagger::NONE);
        assert!(seq.observe(0, 0.0).is_none());
        assert!(seq.observe(0, 0.01).is_some());
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut seq = RevealSequencer::new(2, 0.2, Stagger::NONE);
        assert!(seq.observe(5, 1.0).is_none());
        assert!(!seq.is_revealed(5));
    }

    #[test]
    fn never_entering_is_a_valid_end_state() {
        let seq = RevealSequencer::new(3, 0.2, Stagger::NONE);
        assert!(!seq.all_revealed());
        assert_eq!(seq.revealed_mask(), vec![false; 3]);
    }

    #[test]
    fn reveal_all_skips_observation() {
        let mut seq = RevealSequencer::new(3, 0.2, Stagger::NONE);
        seq.reveal_all();
        assert!(seq.all_revealed());
        assert!(seq.observe(1, 1.0).is_none());
    }
}
