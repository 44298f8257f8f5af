//! Error types for project loading.
//!
//! ERROR HANDLING
//! ==============
//! None of these are fatal to the page. The boot sequence logs them and the
//! container keeps whatever static markup it shipped with.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Reasons the project list could not be loaded or rendered.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no project list container on this page")]
    NoContainer,

    #[error("embedded project data is malformed: {0}")]
    Island(#[source] serde_json::Error),

    #[error("project request failed: {0}")]
    Network(String),

    #[error("project request returned status {0}")]
    Status(u16),

    #[error("project payload is malformed: {0}")]
    Decode(String),

    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl LoadError {
    /// Whether this failure is worth a warning. A page without a project
    /// list is a normal layout, not a fault.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::NoContainer)
    }
}

/// Map an HTTP status to a load outcome.
///
/// # Errors
///
/// Returns [`LoadError::Status`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status(status))
    }
}
