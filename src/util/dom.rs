//! Thin `web-sys` glue shared by the page enhancers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships static markup; these helpers locate the nodes the crate
//! enhances. The heading heuristic is pure so it can be tested without a
//! browser.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

/// Heading stems that mark the projects section ("projeto" covers the
/// Portuguese headings the page was first written with).
const PROJECT_HEADING_STEMS: &[&str] = &["project", "projeto"];

/// Whether a heading's text names the projects section.
pub fn is_projects_heading(text: &str) -> bool {
    let lower = text.to_lowercase();
    PROJECT_HEADING_STEMS.iter().any(|stem| lower.contains(stem))
}

/// Whether a sibling after the projects heading can hold the list.
pub fn is_list_candidate(tag_name: &str, has_projects_class: bool) -> bool {
    tag_name.eq_ignore_ascii_case("ul") || has_projects_class
}

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Text content of the element with `id`, if present.
#[cfg(feature = "csr")]
pub fn element_text_by_id(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

/// First element matching `selector`, swallowing invalid selectors.
#[cfg(feature = "csr")]
pub fn query(selector: &str) -> Option<web_sys::Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
#[cfg(feature = "csr")]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Locate the project list container.
///
/// Tries `selector` first, then the first `ul` (or `.projects`) following a
/// projects heading, then the first `ul` on the page when no heading matches.
#[cfg(feature = "csr")]
pub fn find_projects_container(selector: &str) -> Option<web_sys::Element> {
    if let Some(el) = query(selector) {
        return Some(el);
    }
    let heading = query_all("h1,h2,h3")
        .into_iter()
        .find(|h| is_projects_heading(&h.text_content().unwrap_or_default()));
    let Some(heading) = heading else {
        return query("ul");
    };
    let mut next = heading.next_element_sibling();
    while let Some(el) = next {
        if is_list_candidate(&el.tag_name(), el.class_list().contains("projects")) {
            return Some(el);
        }
        next = el.next_element_sibling();
    }
    None
}

/// Attach a listener for the page lifetime.
#[cfg(feature = "csr")]
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        leptos::logging::warn!("failed to attach {event} listener: {e:?}");
    }
    closure.forget();
}

/// Show a blocking browser alert.
#[cfg(feature = "csr")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
