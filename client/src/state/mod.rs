//! Application state shared through Leptos context.

pub mod color_scheme;
pub mod theme;
