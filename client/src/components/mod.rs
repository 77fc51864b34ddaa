//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome around routed pages, reading the
//! color scheme from Leptos context rather than global state.

pub mod analytics;
pub mod footer;
pub mod nav_header;
