use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::contact_form::{ContactField, ContactForm};
use crate::dom::observer::DomObserver;
use crate::dom::scroll::{element_by_id, query_all};
use crate::motion::active_section::ActiveSectionTracker;
use crate::motion::reveal::RevealSet;
use crate::motion::scope::ObservationScope;
use crate::motion::section::SectionId;
use crate::motion::ticker::RotatingLabelTicker;
use crate::motion::visibility::{ObserverOptions, VisibilityEntry};

pub enum RevealAction {
    Observe(Vec<VisibilityEntry<usize>>),
}

impl Reducible for RevealSet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Observe(entries) => {
                let mut next = (*self).clone();
                if next.apply(&entries) == 0 {
                    return self;
                }
                Rc::new(next)
            }
        }
    }
}

pub enum TrackerAction {
    Observe(Vec<VisibilityEntry<SectionId>>),
}

impl Reducible for ActiveSectionTracker {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TrackerAction::Observe(entries) => {
                let mut next = *self;
                if next.apply(&entries) {
                    debug!("active section is now {}", next.current());
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

pub enum DraftAction {
    Set(ContactField, String),
    Submit,
    Dismiss,
}

impl Reducible for ContactForm {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DraftAction::Set(field, value) => next.draft.set(field, value),
            DraftAction::Submit => match next.submit() {
                Ok(()) => info!("contact message acknowledged locally"),
                Err(err) => {
                    debug!("contact form not submitted: {}", err);
                    return self;
                }
            },
            DraftAction::Dismiss => {
                if next.notice.is_none() {
                    return self;
                }
                next.dismiss();
            }
        }
        Rc::new(next)
    }
}

fn reveal_index(element: &Element) -> Option<usize> {
    element.get_attribute("data-reveal")?.parse().ok()
}

fn section_of(element: &Element) -> Option<SectionId> {
    element.id().parse().ok()
}

/// Reveal state for a section with `count` blocks. Attach the returned
/// `NodeRef` to the section root and render each block with
/// `class="reveal"` and `data-reveal={index}`.
#[hook]
pub fn use_reveal(count: usize) -> (NodeRef, UseReducerHandle<RevealSet>) {
    let section = use_node_ref();
    let reveal = use_reducer(move || RevealSet::new(count, config::REVEAL_THRESHOLD));

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let scope = section.cast::<Element>().and_then(|root| {
                    let targets = query_all(&root, ".reveal");
                    if targets.is_empty() {
                        return None;
                    }
                    let options = ObserverOptions {
                        threshold: config::REVEAL_THRESHOLD,
                        root_margin: None,
                    };
                    match DomObserver::watch(&targets, options, reveal_index, move |batch| {
                        dispatcher.dispatch(RevealAction::Observe(batch))
                    }) {
                        Ok(observer) => Some(ObservationScope::new(observer)),
                        Err(err) => {
                            warn!("reveal animations disabled: {}", err);
                            None
                        }
                    }
                });

                move || drop(scope)
            },
            section.clone(),
        );
    }

    (section, reveal)
}

/// Tracks which section anchor is in the middle band of the viewport.
/// Call it from the component that renders the anchors.
#[hook]
pub fn use_active_section() -> SectionId {
    let tracker = use_reducer(ActiveSectionTracker::new);

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with_deps(
            move |_| {
                let anchors: Vec<Element> = SectionId::ALL
                    .iter()
                    .filter_map(|id| element_by_id(id.as_str()))
                    .collect();

                let scope = if anchors.is_empty() {
                    None
                } else {
                    let options = ObserverOptions {
                        threshold: config::SECTION_THRESHOLD,
                        root_margin: Some(config::SECTION_ROOT_MARGIN),
                    };
                    match DomObserver::watch(&anchors, options, section_of, move |batch| {
                        dispatcher.dispatch(TrackerAction::Observe(batch))
                    }) {
                        Ok(observer) => Some(ObservationScope::new(observer)),
                        Err(err) => {
                            warn!("nav highlighting disabled: {}", err);
                            None
                        }
                    }
                };

                move || drop(scope)
            },
            (),
        );
    }

    tracker.current()
}

/// Label that advances every `ROLE_ROTATION_MS` until unmount.
#[hook]
pub fn use_rotating_label(labels: Vec<String>) -> Option<String> {
    let ticker = use_mut_ref(move || RotatingLabelTicker::new(labels));
    let label = {
        let ticker = ticker.clone();
        use_state(move || ticker.borrow().current().map(str::to_string))
    };

    {
        let label = label.clone();
        use_effect_with_deps(
            move |_| {
                let tick_target = ticker.clone();
                let interval = Interval::new(config::ROLE_ROTATION_MS, move || {
                    let mut ticker = tick_target.borrow_mut();
                    if ticker.is_cancelled() {
                        return;
                    }
                    ticker.tick();
                    label.set(ticker.current().map(str::to_string));
                });

                move || {
                    ticker.borrow_mut().cancel();
                    drop(interval);
                }
            },
            (),
        );
    }

    (*label).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact_form::Acknowledgment;

    fn reveal_entry(index: usize, ratio: f64) -> VisibilityEntry<usize> {
        VisibilityEntry::new(index, ratio, ratio > 0.0)
    }

    fn section_entry(id: SectionId, intersecting: bool) -> VisibilityEntry<SectionId> {
        VisibilityEntry::new(id, if intersecting { 0.4 } else { 0.0 }, intersecting)
    }

    #[test]
    fn reveal_batch_without_news_keeps_the_same_state() {
        let state = Rc::new(RevealSet::new(2, config::REVEAL_THRESHOLD));

        let after_empty = state.clone().reduce(RevealAction::Observe(Vec::new()));
        assert!(Rc::ptr_eq(&state, &after_empty));

        let after_hidden = state.clone().reduce(RevealAction::Observe(vec![reveal_entry(0, 0.0)]));
        assert!(Rc::ptr_eq(&state, &after_hidden));

        let revealed = state.clone().reduce(RevealAction::Observe(vec![reveal_entry(0, 0.5)]));
        assert!(!Rc::ptr_eq(&state, &revealed));
        assert!(revealed.is_active(0));

        let again = revealed.clone().reduce(RevealAction::Observe(vec![reveal_entry(0, 0.9)]));
        assert!(Rc::ptr_eq(&revealed, &again));
    }

    #[test]
    fn tracker_batch_that_changes_nothing_keeps_the_same_state() {
        let state = Rc::new(ActiveSectionTracker::new());

        let after_empty = state.clone().reduce(TrackerAction::Observe(Vec::new()));
        assert!(Rc::ptr_eq(&state, &after_empty));

        let after_leaving = state
            .clone()
            .reduce(TrackerAction::Observe(vec![section_entry(SectionId::About, false)]));
        assert!(Rc::ptr_eq(&state, &after_leaving));

        let same_section = state
            .clone()
            .reduce(TrackerAction::Observe(vec![section_entry(SectionId::Hero, true)]));
        assert!(Rc::ptr_eq(&state, &same_section));

        let moved = state
            .clone()
            .reduce(TrackerAction::Observe(vec![section_entry(SectionId::Projects, true)]));
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.current(), SectionId::Projects);
    }

    #[test]
    fn element_ids_outside_the_section_set_have_no_key() {
        assert_eq!("about".parse::<SectionId>().ok(), Some(SectionId::About));
        assert_eq!("pricing".parse::<SectionId>().ok(), None);
        assert_eq!("".parse::<SectionId>().ok(), None);
    }

    #[test]
    fn back_to_back_inputs_both_land() {
        let state = Rc::new(ContactForm::default());
        let state = state.reduce(DraftAction::Set(ContactField::Name, "Ada".to_string()));
        let state = state.reduce(DraftAction::Set(ContactField::Email, "ada@example.com".to_string()));

        assert_eq!(state.draft.name, "Ada");
        assert_eq!(state.draft.email, "ada@example.com");
    }

    #[test]
    fn blocked_submit_keeps_the_same_state() {
        let state = Rc::new(ContactForm::default())
            .reduce(DraftAction::Set(ContactField::Name, "Ada".to_string()));

        let after = state.clone().reduce(DraftAction::Submit);
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.draft.name, "Ada");
    }

    #[test]
    fn accepted_submit_clears_the_draft_and_raises_a_notice() {
        let mut state = Rc::new(ContactForm::default());
        for (field, value) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.com"),
            (ContactField::Subject, "Hello"),
            (ContactField::Message, "Let's build something."),
        ] {
            state = state.reduce(DraftAction::Set(field, value.to_string()));
        }

        let state = state.reduce(DraftAction::Submit);
        assert_eq!(state.submitted(), 1);
        assert_eq!(state.notice, Some(Acknowledgment::default()));
        assert_eq!(state.draft.first_missing(), Some(ContactField::Name));

        let state = state.reduce(DraftAction::Dismiss);
        assert_eq!(state.notice, None);
        let again = state.clone().reduce(DraftAction::Dismiss);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
