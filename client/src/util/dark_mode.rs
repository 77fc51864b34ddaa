//! Color-scheme handoff between the server render and the hydrated app.
//!
//! The server resolves the request's preference and writes it onto `<html>`
//! as `data-mantine-color-scheme` (plus its source). On hydration the browser
//! reads those attributes back instead of re-deriving the value, so the first
//! interactive frame matches the first painted frame.
//!
//! TRADE-OFFS
//! ==========
//! Attribute writes are browser-only; SSR paths no-op to keep server
//! rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::color_scheme::{ColorScheme, Preference, PreferenceSource};

/// Attribute on `<html>` carrying the active scheme.
pub const SCHEME_ATTRIBUTE: &str = "data-mantine-color-scheme";

/// Attribute on `<html>` carrying where the server got the scheme from.
pub const SOURCE_ATTRIBUTE: &str = "data-color-scheme-source";

/// Rebuild a preference from rendered attribute values.
///
/// A missing or unknown scheme falls back to the default preference.
pub fn preference_from_attributes(scheme: Option<&str>, source: Option<&str>) -> Preference {
    match scheme.and_then(|s| s.parse::<ColorScheme>().ok()) {
        Some(value) => Preference {
            value,
            source: source
                .and_then(PreferenceSource::parse)
                .unwrap_or(PreferenceSource::CookiePresent),
        },
        None => Preference::default(),
    }
}

/// Preference the app starts from in the current environment.
///
/// Server: resolved from the request cookies. Browser: adopted from the
/// server-rendered attributes. Elsewhere: the default.
pub fn initial_preference() -> Preference {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else {
            return Preference::default();
        };
        preference_from_attributes(
            root.get_attribute(SCHEME_ATTRIBUTE).as_deref(),
            root.get_attribute(SOURCE_ATTRIBUTE).as_deref(),
        )
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        use leptos::prelude::use_context;

        use crate::state::color_scheme::resolve;
        use crate::util::cookies::RequestCookies;

        use_context::<http::request::Parts>()
            .map(|parts| resolve(&RequestCookies::from_headers(&parts.headers)))
            .unwrap_or_default()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        Preference::default()
    }
}

/// Set the scheme attribute on the `<html>` element.
pub fn apply(scheme: ColorScheme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(SCHEME_ATTRIBUTE, scheme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scheme;
    }
}
