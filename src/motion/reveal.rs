use super::visibility::VisibilityEntry;

/// Reveal flags for the blocks of one section, indexed by the
/// `data-reveal` attribute the section renders on each block.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSet {
    active: Vec<bool>,
    threshold: f64,
}

impl RevealSet {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            active: vec![false; count],
            threshold,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Latches every entry at or above the threshold. Flags only ever go
    /// from false to true. Returns how many blocks were newly revealed.
    pub fn apply(&mut self, entries: &[VisibilityEntry<usize>]) -> usize {
        let mut revealed = 0;
        for entry in entries {
            if !entry.reaches(self.threshold) {
                continue;
            }
            if let Some(flag) = self.active.get_mut(entry.target) {
                if !*flag {
                    *flag = true;
                    revealed += 1;
                }
            }
        }
        revealed
    }

    /// CSS classes for block `index`.
    pub fn class(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "reveal active"
        } else {
            "reveal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REVEAL_THRESHOLD;
    use crate::motion::scope::{Observation, ObservationScope};
    use std::cell::Cell;
    use std::rc::Rc;

    fn seen(index: usize, ratio: f64) -> VisibilityEntry<usize> {
        VisibilityEntry::new(index, ratio, ratio > 0.0)
    }

    #[test]
    fn reveal_latches_and_never_resets() {
        let mut set = RevealSet::new(2, REVEAL_THRESHOLD);
        assert!(!set.is_active(0));

        assert_eq!(set.apply(&[seen(0, 0.5)]), 1);
        assert!(set.is_active(0));

        // Scrolling the block back out does not undo the reveal.
        assert_eq!(set.apply(&[seen(0, 0.0)]), 0);
        assert!(set.is_active(0));

        // A second crossing is not counted twice.
        assert_eq!(set.apply(&[seen(0, 0.8)]), 0);
        assert_eq!(set.class(0), "reveal active");
        assert_eq!(set.class(1), "reveal");
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut set = RevealSet::new(1, REVEAL_THRESHOLD);
        assert_eq!(set.apply(&[seen(0, 0.05)]), 0);
        assert!(!set.is_active(0));

        assert_eq!(set.apply(&[seen(0, 0.1)]), 1);
        assert!(set.is_active(0));
    }

    #[test]
    fn crossing_callback_slightly_under_threshold_reveals() {
        let mut set = RevealSet::new(1, REVEAL_THRESHOLD);
        assert_eq!(set.apply(&[seen(0, 0.0999)]), 1);
        assert_eq!(set.class(0), "reveal active");
    }

    #[test]
    fn non_intersecting_entries_are_ignored_even_with_a_stale_ratio() {
        let mut set = RevealSet::new(1, REVEAL_THRESHOLD);
        set.apply(&[VisibilityEntry::new(0, 0.4, false)]);
        assert!(!set.is_active(0));
    }

    #[test]
    fn unknown_indices_are_ignored() {
        let mut set = RevealSet::new(1, REVEAL_THRESHOLD);
        assert_eq!(set.apply(&[seen(7, 1.0)]), 0);
        assert!(!set.is_active(7));
        assert!(!set.is_active(0));
    }

    #[test]
    fn monotonic_over_an_arbitrary_event_sequence() {
        let mut set = RevealSet::new(3, REVEAL_THRESHOLD);
        let ratios = [0.0, 0.3, 0.0, 0.09, 1.0, 0.0, 0.2, 0.0];
        let mut previous = vec![false; 3];
        for (step, ratio) in ratios.iter().enumerate() {
            set.apply(&[seen(step % 3, *ratio)]);
            for (index, was_active) in previous.iter_mut().enumerate() {
                let now = set.is_active(index);
                assert!(!(*was_active && !now), "block {index} was hidden again");
                *was_active = now;
            }
        }
    }

    struct CountingObservation(Rc<Cell<u32>>);

    impl Observation for CountingObservation {
        fn disconnect(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn section_reveals_all_blocks_and_releases_observer_once() {
        let released = Rc::new(Cell::new(0));
        let mut set = RevealSet::new(3, REVEAL_THRESHOLD);

        // mount
        let scope = ObservationScope::new(CountingObservation(released.clone()));

        let batch = vec![seen(0, 0.2), seen(1, 0.6), seen(2, 1.0)];
        assert_eq!(set.apply(&batch), 3);
        assert!((0..3).all(|index| set.is_active(index)));
        assert_eq!(released.get(), 0);

        // unmount
        drop(scope);
        assert_eq!(released.get(), 1);
    }
}
