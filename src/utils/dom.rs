//! DOM and Web API utility functions.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Smooth-scroll the section with the given element id into view.
///
/// No-op when the element does not exist; navigation must never panic over
/// a missing section.
pub fn scroll_to_section(section_id: &str) {
    if let Some(document) = document()
        && let Some(section) = document.get_element_by_id(section_id)
    {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
