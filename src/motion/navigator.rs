use log::debug;

use super::section::SectionId;

/// Something that can bring a section anchor to the top of the viewport.
pub trait ScrollSurface {
    /// Returns false when the anchor is not mounted.
    fn scroll_to_top(&self, anchor: SectionId) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Scrolled(SectionId),
    Ignored,
}

pub struct SmoothScrollNavigator<S> {
    surface: S,
}

impl<S: ScrollSurface> SmoothScrollNavigator<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Unknown names and unmounted anchors are silently ignored.
    pub fn navigate(&self, target: &str) -> Navigation {
        let id = match target.parse::<SectionId>() {
            Ok(id) => id,
            Err(err) => {
                debug!("ignoring navigation: {}", err);
                return Navigation::Ignored;
            }
        };
        if self.surface.scroll_to_top(id) {
            Navigation::Scrolled(id)
        } else {
            debug!("section {id} is not mounted");
            Navigation::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Viewport stand-in that tracks which anchor sits at the top.
    struct FakeViewport {
        mounted: Vec<SectionId>,
        top: RefCell<SectionId>,
    }

    impl ScrollSurface for &FakeViewport {
        fn scroll_to_top(&self, anchor: SectionId) -> bool {
            if !self.mounted.contains(&anchor) {
                return false;
            }
            *self.top.borrow_mut() = anchor;
            true
        }
    }

    fn viewport(mounted: &[SectionId]) -> FakeViewport {
        FakeViewport {
            mounted: mounted.to_vec(),
            top: RefCell::new(SectionId::Hero),
        }
    }

    #[test]
    fn known_section_is_top_aligned() {
        let view = viewport(&SectionId::ALL);
        let navigator = SmoothScrollNavigator::new(&view);

        assert_eq!(
            navigator.navigate("experience"),
            Navigation::Scrolled(SectionId::Experience)
        );
        assert_eq!(*view.top.borrow(), SectionId::Experience);
    }

    #[test]
    fn unknown_name_changes_nothing() {
        let view = viewport(&SectionId::ALL);
        let navigator = SmoothScrollNavigator::new(&view);
        navigator.navigate("about");

        assert_eq!(navigator.navigate("pricing"), Navigation::Ignored);
        assert_eq!(navigator.navigate(""), Navigation::Ignored);
        assert_eq!(*view.top.borrow(), SectionId::About);
    }

    #[test]
    fn unmounted_anchor_is_a_no_op() {
        let view = viewport(&[SectionId::Hero, SectionId::About]);
        let navigator = SmoothScrollNavigator::new(&view);

        assert_eq!(navigator.navigate("contact"), Navigation::Ignored);
        assert_eq!(*view.top.borrow(), SectionId::Hero);
    }
}
