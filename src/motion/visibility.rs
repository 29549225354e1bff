/// Browsers can report a ratio just under the configured threshold on the
/// crossing callback itself.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One observation delivered by a visibility observer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry<K> {
    pub target: K,
    /// Visible fraction of the target's area, 0.0..=1.0.
    pub ratio: f64,
    pub intersecting: bool,
}

impl<K> VisibilityEntry<K> {
    pub fn new(target: K, ratio: f64, intersecting: bool) -> Self {
        Self {
            target,
            ratio,
            intersecting,
        }
    }

    pub fn reaches(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// Options handed to the browser observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_reported_just_under_threshold_still_reaches() {
        assert!(VisibilityEntry::new(0, 0.0999, true).reaches(0.1));
        assert!(VisibilityEntry::new(0, 0.1, true).reaches(0.1));
    }

    #[test]
    fn clearly_below_threshold_does_not_reach() {
        assert!(!VisibilityEntry::new(0, 0.098, true).reaches(0.1));
        assert!(!VisibilityEntry::new(0, 0.5, false).reaches(0.1));
    }
}
