//! Project modal state and the handle used to drive it.
//!
//! DESIGN
//! ======
//! Visibility lives here, not in the DOM. The modal component projects
//! `ModalState` onto the root's `hidden` class, so the class is written
//! once per transition and never read back. Callers get a `ModalHandle`
//! passed to them instead of reaching for a page-global function.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

use crate::net::types::Project;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visibility: Visibility,
    /// Record on display. `None` renders an empty dialog.
    pub project: Option<Project>,
}

impl ModalState {
    /// Open with `project`, replacing whatever was shown before.
    pub fn show(&mut self, project: Option<Project>) {
        self.project = project;
        self.visibility = Visibility::Open;
    }

    /// Close. Content is kept until the next `show`.
    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }
}

/// Keys that dismiss the modal from anywhere in the document.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Root class list for a given visibility.
pub fn root_class(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Open => "js-modal modal",
        Visibility::Closed => "js-modal modal hidden",
    }
}

/// Copyable handle to the single project modal.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    state: RwSignal<ModalState>,
}

impl ModalHandle {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ModalState::default()) }
    }

    pub fn show(&self, project: Option<Project>) {
        self.state.update(|s| s.show(project));
    }

    /// Close from any dismissal trigger; a no-op when already closed.
    pub fn close(&self) {
        if !self.state.with_untracked(ModalState::is_open) {
            return;
        }
        self.state.update(ModalState::close);
    }

    /// Close on a document keydown when `key` is a dismiss key.
    pub fn dismiss_on_key(&self, key: &str) {
        if is_dismiss_key(key) {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(ModalState::is_open)
    }

    pub fn state(&self) -> RwSignal<ModalState> {
        self.state
    }
}

impl Default for ModalHandle {
    fn default() -> Self {
        Self::new()
    }
}
