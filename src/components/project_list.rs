//! Project list rendering into the page's existing container.
//!
//! SYSTEM CONTEXT
//! ==============
//! The container already holds a static fallback list. On a successful load
//! its content is replaced with one entry per project; on failure it is left
//! exactly as shipped. Clicks on any entry's details button are handled by a
//! single listener on the container.

#[cfg(test)]
#[path = "project_list_test.rs"]
mod project_list_test;

use std::fmt::Write as _;

use crate::net::types::Project;
use crate::util::escape::escape_html;

pub const DETAILS_SELECTOR: &str = "button.details";
pub const INDEX_ATTR: &str = "data-idx";
/// Marks a container whose delegated click listener is already attached.
pub const BOUND_ATTR: &str = "data-folio-bound";

/// Markup for the whole list, one `li.project-item` per record.
pub fn render_entries(projects: &[Project]) -> String {
    let mut out = String::new();
    for (idx, project) in projects.iter().enumerate() {
        let _ = write!(
            out,
            r#"<li class="project-item"><strong>{title}</strong><p class="short">{short}</p><button class="details" {INDEX_ATTR}="{idx}">View details</button></li>"#,
            title = escape_html(&project.title),
            short = escape_html(project.short()),
        );
    }
    out
}

/// Replace the container's content and make sure its click listener exists.
#[cfg(feature = "csr")]
pub fn render_into(container: &web_sys::Element, projects: &[Project], bridge: crate::net::projects::DetailBridge) {
    container.set_inner_html(&render_entries(projects));
    if container.has_attribute(BOUND_ATTR) {
        return;
    }
    let _ = container.set_attribute(BOUND_ATTR, "");
    crate::util::dom::listen(container, "click", move |ev| {
        use wasm_bindgen::JsCast;

        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Some(button) = target.closest(DETAILS_SELECTOR).ok().flatten() else {
            return;
        };
        let raw = button.get_attribute(INDEX_ATTR);
        let Some(idx) = crate::net::projects::parse_index(raw.as_deref()) else {
            leptos::logging::debug_warn!("ignoring details click with index {raw:?}");
            return;
        };
        leptos::task::spawn_local(bridge.open(idx));
    });
}

/// Load the project list and render it into the page's container.
///
/// Failures are logged; the static content stays in place.
#[cfg(feature = "csr")]
pub async fn init(cfg: crate::config::FolioConfig, bridge: crate::net::projects::DetailBridge) {
    use crate::error::LoadError;

    let result = async {
        let container = crate::util::dom::find_projects_container(&cfg.list_selector).ok_or(LoadError::NoContainer)?;
        let projects = crate::net::projects::load_projects(&cfg).await?;
        render_into(&container, &projects, bridge);
        Ok::<usize, LoadError>(projects.len())
    }
    .await;

    match result {
        Ok(count) => leptos::logging::log!("rendered {count} projects"),
        Err(e) if e.is_warning() => {
            leptos::logging::warn!("could not load projects, keeping static content: {e}");
        }
        Err(e) => leptos::logging::debug_warn!("{e}"),
    }
}
