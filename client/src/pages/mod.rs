//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages only supply routed content; the surrounding header, footer, and
//! theme come from `app`.

pub mod home;
