//! Reusable project details modal.
//!
//! One modal root per page, appended to `<body>` on first install and marked
//! with `.js-modal`. Its content is rebuilt from `ModalState` on every show;
//! close button, backdrop click, and Escape anywhere in the document close it.

#[cfg(test)]
#[path = "project_modal_test.rs"]
mod project_modal_test;

use std::fmt::Write as _;

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::modal::{ModalHandle, root_class};
use crate::util::escape::escape_html;

/// Reserved marker for the singleton root.
pub const MODAL_SELECTOR: &str = ".js-modal";

/// Inner markup for a record; `None` yields an empty title and body.
pub fn modal_content(project: Option<&Project>) -> String {
    let Some(project) = project else {
        return "<h2></h2><p></p>".to_owned();
    };
    let title = escape_html(&project.title);
    let mut out = format!("<h2>{title}</h2><p>{}</p>", escape_html(project.summary()));
    if let Some(image) = project.image() {
        let _ = write!(out, r#"<img src="{}" alt="{title}" />"#, escape_html(image));
    }
    if let Some(link) = project.link() {
        let _ = write!(
            out,
            r#"<p><a href="{}" target="_blank" rel="noopener">View project</a></p>"#,
            escape_html(link)
        );
    }
    out
}

/// Modal root: backdrop, dialog body, close button, content region.
#[component]
pub fn ProjectModal(handle: ModalHandle) -> impl IntoView {
    let state = handle.state();
    let class = move || state.with(|s| root_class(s.visibility));
    let content = move || state.with(|s| modal_content(s.project.as_ref()));

    view! {
        <div class=class>
            <div class="modal-backdrop" on:click=move |_| handle.close()></div>
            <div class="modal-body" role="dialog" aria-modal="true">
                <button
                    class="modal-close"
                    aria-label="Close"
                    on:click=move |_| handle.close()
                >
                    "×"
                </button>
                <div class="modal-content" inner_html=content></div>
            </div>
        </div>
    }
}

/// Run `mount` unless `exists` reports a modal root already on the page.
///
/// Returns whether `mount` ran.
pub fn install_with(exists: impl FnOnce() -> bool, mount: impl FnOnce()) -> bool {
    if exists() {
        return false;
    }
    mount();
    true
}

/// Mount the modal once and wire the global Escape listener.
///
/// Returns `false` when a modal root already exists, leaving it untouched.
#[cfg(feature = "csr")]
pub fn install(handle: ModalHandle) -> bool {
    install_with(
        || crate::util::dom::query(MODAL_SELECTOR).is_some(),
        move || {
            leptos::mount::mount_to_body(move || view! { <ProjectModal handle=handle /> });
            let _ = window_event_listener(leptos::ev::keydown, move |ev| handle.dismiss_on_key(&ev.key()));
        },
    )
}
