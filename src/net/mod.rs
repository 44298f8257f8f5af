//! Project data: wire schema and the loaders that resolve it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the project record, `projects` resolves the list from the
//! page's data island or `projects.json` and feeds the detail view.

pub mod projects;
pub mod types;
