//! Light/dark color scheme state shared between server render and browser.
//!
//! DESIGN
//! ======
//! The preference lives in the `mantine-color-scheme` cookie. A request is
//! resolved once on the server (phase 1) and the result is rendered into the
//! page; the browser adopts that exact value on hydration (phase 2) and owns
//! every later change. Changes update memory first and persist second, so a
//! storage failure never blocks the visual switch.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::util::cookies::{CookieError, CookieStore, DocumentCookies};

/// Cookie holding the persisted scheme.
pub const COOKIE_NAME: &str = "mantine-color-scheme";

/// Cookie lifetime: 30 days.
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 30;

/// The two supported color schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme: {0:?}")]
pub struct UnknownColorScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownColorScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownColorScheme(other.to_owned())),
        }
    }
}

/// Where the current value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceSource {
    CookieDefault,
    CookiePresent,
    RuntimeToggle,
}

impl PreferenceSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CookieDefault => "cookie-default",
            Self::CookiePresent => "cookie-present",
            Self::RuntimeToggle => "runtime-toggle",
        }
    }

    /// Inverse of [`PreferenceSource::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "cookie-default" => Some(Self::CookieDefault),
            "cookie-present" => Some(Self::CookiePresent),
            "runtime-toggle" => Some(Self::RuntimeToggle),
            _ => None,
        }
    }
}

/// A color scheme together with its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub value: ColorScheme,
    pub source: PreferenceSource,
}

impl Default for Preference {
    fn default() -> Self {
        Self { value: ColorScheme::default(), source: PreferenceSource::CookieDefault }
    }
}

/// Resolve the preference carried by `store`. Never fails.
pub fn resolve(store: &impl CookieStore) -> Preference {
    match store.read(COOKIE_NAME).and_then(|raw| raw.parse::<ColorScheme>().ok()) {
        Some(value) => Preference { value, source: PreferenceSource::CookiePresent },
        None => Preference::default(),
    }
}

/// Scheme resolved for a request: the cookie value, or `dark`.
pub fn initialize(store: &impl CookieStore) -> ColorScheme {
    resolve(store).value
}

/// Outcome of a toggle: `explicit` when given, otherwise the opposite of `current`.
pub fn next_scheme(current: ColorScheme, explicit: Option<ColorScheme>) -> ColorScheme {
    explicit.unwrap_or_else(|| current.opposite())
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Owns the active scheme for one session and persists changes to `S`.
#[derive(Clone, Debug)]
pub struct ColorSchemeController<S> {
    preference: Preference,
    store: S,
}

impl<S: CookieStore> ColorSchemeController<S> {
    /// Phase 1: resolve from the store.
    pub fn initialize(store: S) -> Self {
        Self { preference: resolve(&store), store }
    }

    /// Phase 2: adopt a preference resolved elsewhere without consulting the store.
    pub fn hydrate(initial: Preference, store: S) -> Self {
        Self { preference: initial, store }
    }

    pub fn current(&self) -> ColorScheme {
        self.preference.value
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Update the in-memory value only.
    pub fn transition(&mut self, explicit: Option<ColorScheme>) -> ColorScheme {
        let next = next_scheme(self.preference.value, explicit);
        self.preference = Preference { value: next, source: PreferenceSource::RuntimeToggle };
        next
    }

    /// Write the current value to the store with the 30-day lifetime.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`CookieError`]; the in-memory value is kept.
    pub fn persist(&mut self) -> Result<(), CookieError> {
        self.store.write(
            COOKIE_NAME,
            self.preference.value.as_str(),
            Duration::seconds(COOKIE_MAX_AGE_SECS),
        )
    }

    /// Flip (or set) the scheme, then persist it. Persistence is best effort.
    pub fn toggle(&mut self, explicit: Option<ColorScheme>) -> ColorScheme {
        let next = self.transition(explicit);
        if let Err(e) = self.persist() {
            log::warn!("color scheme not persisted: {e}");
        }
        next
    }
}

// =============================================================================
// LEPTOS CONTEXT
// =============================================================================

/// Reactive handle provided at the app root.
///
/// `scheme` drives every themed view; `toggle` is the only way to change it.
#[derive(Clone, Copy)]
pub struct ColorSchemeContext {
    scheme: RwSignal<ColorScheme>,
    controller: StoredValue<ColorSchemeController<DocumentCookies>>,
}

impl ColorSchemeContext {
    pub fn new(initial: Preference) -> Self {
        Self {
            scheme: RwSignal::new(initial.value),
            controller: StoredValue::new(ColorSchemeController::hydrate(initial, DocumentCookies)),
        }
    }

    /// Current scheme, tracked.
    pub fn get(&self) -> ColorScheme {
        self.scheme.get()
    }

    /// Flip (or set) the scheme. The signal changes before the cookie write.
    pub fn toggle(&self, explicit: Option<ColorScheme>) -> ColorScheme {
        let next = self
            .controller
            .try_update_value(|c| c.transition(explicit))
            .unwrap_or_else(|| next_scheme(self.scheme.get_untracked(), explicit));
        self.scheme.set(next);

        self.controller.update_value(|c| {
            if let Err(e) = c.persist() {
                log::warn!("color scheme not persisted: {e}");
            }
        });
        next
    }
}

/// Install the color-scheme context for the component tree.
pub fn provide_color_scheme(initial: Preference) -> ColorSchemeContext {
    let ctx = ColorSchemeContext::new(initial);
    provide_context(ctx);
    ctx
}

/// Fetch the context installed by [`provide_color_scheme`].
pub fn use_color_scheme() -> ColorSchemeContext {
    expect_context::<ColorSchemeContext>()
}
