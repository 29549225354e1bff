use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::motion::navigator::{Navigation, ScrollSurface, SmoothScrollNavigator};
use crate::motion::section::SectionId;

pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Smooth-scrolls section anchors of the live document.
#[derive(Clone, Copy, Default)]
pub struct DocumentScroll;

impl ScrollSurface for DocumentScroll {
    fn scroll_to_top(&self, anchor: SectionId) -> bool {
        let Some(element) = element_by_id(anchor.as_str()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn navigate(target: &str) -> Navigation {
    SmoothScrollNavigator::new(DocumentScroll).navigate(target)
}
