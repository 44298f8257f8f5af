//! Smooth in-page anchor scrolling and reveal-on-scroll animations.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ANIMATE_SELECTOR: &str = "[data-animate]";
pub const PRE_ANIMATE_CLASS: &str = "pre-animate";
pub const IN_VIEW_CLASS: &str = "in-view";

/// Fragment selector for an in-page anchor `href`.
///
/// A bare `#` (commonly used for "back to top" or JS-only links) has no
/// target and keeps its default behavior.
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(href) }
}

/// Make every in-page anchor scroll smoothly to its target.
#[cfg(feature = "csr")]
pub fn init_smooth_scroll() {
    use crate::util::dom::{listen, query, query_all};

    for anchor in query_all(ANCHOR_SELECTOR) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        listen(&anchor, "click", move |ev| {
            let Some(target) = anchor_target(&href).and_then(query) else {
                return;
            };
            ev.prevent_default();
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href.as_str()));
            }
        });
    }
}

/// Tag `[data-animate]` elements and mark them `in-view` once visible.
#[cfg(feature = "csr")]
pub fn init_reveal(threshold: f64) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let targets = crate::util::dom::query_all(ANIMATE_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(IN_VIEW_CLASS);
            }
        }
    });
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            leptos::logging::warn!("reveal animations disabled: {e:?}");
            return;
        }
    };
    callback.forget();

    for el in targets {
        let _ = el.class_list().add_1(PRE_ANIMATE_CLASS);
        observer.observe(&el);
    }
}
