//! Page boot sequence.
//!
//! Runs once when the WASM module starts. Each enhancer is independent: a
//! missing element or a failed load in one never stops the others.

use crate::config::FolioConfig;
#[cfg(feature = "csr")]
use crate::net::projects::DetailBridge;
#[cfg(feature = "csr")]
use crate::state::modal::ModalHandle;

/// Wire every page enhancer.
pub fn boot() {
    let cfg = FolioConfig::from_page();

    #[cfg(feature = "csr")]
    {
        use crate::components::{project_list, project_modal};
        use crate::util::{contact, scroll, theme};

        let _ = leptos::task::Executor::init_wasm_bindgen();
        theme::init(&cfg.theme_key, &cfg.theme_toggle_selector);
        scroll::init_smooth_scroll();

        let modal = ModalHandle::new();
        if project_modal::install(modal) {
            let bridge = DetailBridge::new(&cfg, modal);
            leptos::task::spawn_local(project_list::init(cfg.clone(), bridge));
        } else {
            leptos::logging::warn!(
                "a {} root already exists; leaving the project list static",
                project_modal::MODAL_SELECTOR
            );
        }

        contact::init(&cfg.contact_form_selector, &cfg.contact_endpoint);
        scroll::init_reveal(cfg.reveal_threshold);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cfg;
    }
}
