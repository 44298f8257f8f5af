//! Utility helpers shared across the page enhancers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, listeners, observers)
//! from the project list and modal so the decision logic stays testable.

pub mod contact;
pub mod dom;
pub mod escape;
pub mod scroll;
pub mod theme;
