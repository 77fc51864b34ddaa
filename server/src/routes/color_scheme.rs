//! Color-scheme API: the preference a page render would use for this request.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use site_client::state::color_scheme::{Preference, resolve};
use site_client::util::cookies::{CookieError, CookieStore};

/// Read-only [`CookieStore`] over an extracted request jar.
pub struct JarCookies<'a>(pub &'a CookieJar);

impl CookieStore for JarCookies<'_> {
    fn read(&self, name: &str) -> Option<String> {
        self.0.get(name).map(Cookie::value).map(str::to_owned)
    }

    fn write(&mut self, _name: &str, _value: &str, _max_age: time::Duration) -> Result<(), CookieError> {
        Err(CookieError::ReadOnly)
    }
}

/// `GET /api/color-scheme` — resolve the request cookie into a preference.
pub async fn current(jar: CookieJar) -> Json<Preference> {
    let preference = resolve(&JarCookies(&jar));
    tracing::debug!(value = %preference.value, source = preference.source.as_str(), "color scheme resolved");
    Json(preference)
}
