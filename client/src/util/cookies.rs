//! Cookie access behind a small injectable trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The color-scheme controller reads and writes its preference through
//! [`CookieStore`] so the same logic runs against request headers on the
//! server, `document.cookie` in the browser, and an in-memory map in tests.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::HashMap;

use cookie::Cookie;
use time::Duration;

/// Errors produced when persisting a cookie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    #[error("cookie store is read-only")]
    ReadOnly,
    #[error("cookie storage unavailable")]
    Unavailable,
    #[error("cookie write rejected: {0}")]
    Rejected(String),
}

/// Key/value cookie storage with expiry on write.
pub trait CookieStore {
    /// Value of cookie `name`, if present.
    fn read(&self, name: &str) -> Option<String>;

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`CookieError`] when the backing store cannot accept writes.
    fn write(&mut self, name: &str, value: &str, max_age: Duration) -> Result<(), CookieError>;
}

/// Render a site-wide cookie assignment (`name=value; Path=/; Max-Age=N`).
///
/// The path is pinned to `/` so a write from any page is visible to every
/// later request; the domain is left to the browser default.
pub fn serialize(name: &str, value: &str, max_age: Duration) -> String {
    Cookie::build((name, value)).path("/").max_age(max_age).build().to_string()
}

// =============================================================================
// REQUEST COOKIES
// =============================================================================

/// Read-only cookies parsed from incoming `Cookie` header values.
#[derive(Clone, Debug, Default)]
pub struct RequestCookies {
    pairs: Vec<(String, String)>,
}

impl RequestCookies {
    /// Parse one or more raw `Cookie` header values. Malformed pairs are skipped.
    pub fn from_header_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let pairs = values
            .into_iter()
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .map(|c| (c.name().to_owned(), c.value().to_owned()))
            .collect();
        Self { pairs }
    }

    /// Collect every `Cookie` header on a request.
    #[cfg(feature = "ssr")]
    pub fn from_headers(headers: &http::HeaderMap) -> Self {
        Self::from_header_values(
            headers
                .get_all(http::header::COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok()),
        )
    }
}

impl CookieStore for RequestCookies {
    // First occurrence wins: browsers send the most specific path first.
    fn read(&self, name: &str) -> Option<String> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
    }

    fn write(&mut self, _name: &str, _value: &str, _max_age: Duration) -> Result<(), CookieError> {
        Err(CookieError::ReadOnly)
    }
}

// =============================================================================
// MEMORY COOKIES
// =============================================================================

/// A cookie held by [`MemoryCookies`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredCookie {
    pub value: String,
    pub max_age: Duration,
}

/// In-process cookie jar that remembers the expiry of each write.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    entries: HashMap<String, StoredCookie>,
}

impl MemoryCookies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a cookie as if it arrived with a request.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.entries.insert(
            name.to_owned(),
            StoredCookie { value: value.to_owned(), max_age: Duration::ZERO },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&StoredCookie> {
        self.entries.get(name)
    }

    /// Render the jar as a single `Cookie` request header value.
    #[cfg(test)]
    pub(crate) fn to_header_value(&self) -> String {
        let mut pairs: Vec<_> = self.entries.iter().map(|(n, c)| format!("{n}={}", c.value)).collect();
        pairs.sort();
        pairs.join("; ")
    }
}

impl CookieStore for MemoryCookies {
    fn read(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|c| c.value.clone())
    }

    fn write(&mut self, name: &str, value: &str, max_age: Duration) -> Result<(), CookieError> {
        self.entries
            .insert(name.to_owned(), StoredCookie { value: value.to_owned(), max_age });
        Ok(())
    }
}

// =============================================================================
// DOCUMENT COOKIES
// =============================================================================

/// Browser cookie jar backed by `document.cookie`.
///
/// Outside the browser reads return `None` and writes are accepted no-ops,
/// which keeps server rendering deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieStore for DocumentCookies {
    fn read(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            RequestCookies::from_header_values([raw.as_str()]).read(name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }

    fn write(&mut self, name: &str, value: &str, max_age: Duration) -> Result<(), CookieError> {
        #[cfg(feature = "hydrate")]
        {
            let doc = html_document().ok_or(CookieError::Unavailable)?;
            doc.set_cookie(&serialize(name, value, max_age))
                .map_err(|e| CookieError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value, max_age);
            Ok(())
        }
    }
}
