//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `project_list` renders into the page's own container; `project_modal` is
//! the one piece mounted as a Leptos view, appended to `<body>`.

pub mod project_list;
pub mod project_modal;
