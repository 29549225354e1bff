use super::section::SectionId;
use super::visibility::VisibilityEntry;

/// Which section the nav bar highlights.
///
/// Batches are applied in delivery order and the last intersecting entry
/// wins. Observers deliver entries in DOM order, so scrolling down lets the
/// lower section overwrite the upper one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    current: SectionId,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Returns true when the active section changed.
    pub fn apply(&mut self, entries: &[VisibilityEntry<SectionId>]) -> bool {
        let before = self.current;
        for entry in entries {
            if entry.intersecting {
                self.current = entry.target;
            }
        }
        before != self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: SectionId, intersecting: bool) -> VisibilityEntry<SectionId> {
        VisibilityEntry::new(id, if intersecting { 0.4 } else { 0.0 }, intersecting)
    }

    #[test]
    fn starts_at_hero() {
        assert_eq!(ActiveSectionTracker::new().current(), SectionId::Hero);
    }

    #[test]
    fn last_intersecting_entry_in_batch_wins() {
        let mut tracker = ActiveSectionTracker::new();
        let changed = tracker.apply(&[
            entry(SectionId::About, true),
            entry(SectionId::Projects, true),
            entry(SectionId::Experience, false),
        ]);
        assert!(changed);
        assert_eq!(tracker.current(), SectionId::Projects);
    }

    #[test]
    fn scrolling_back_up_lets_the_upper_section_win() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.apply(&[entry(SectionId::Contact, true)]);
        tracker.apply(&[
            entry(SectionId::Contact, false),
            entry(SectionId::Experience, true),
        ]);
        assert_eq!(tracker.current(), SectionId::Experience);
    }

    #[test]
    fn non_intersecting_batch_keeps_current() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.apply(&[entry(SectionId::About, true)]);
        let changed = tracker.apply(&[entry(SectionId::About, false)]);
        assert!(!changed);
        assert_eq!(tracker.current(), SectionId::About);
    }
}
