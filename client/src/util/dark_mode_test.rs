#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn initial_preference_defaults_outside_a_request() {
    assert_eq!(initial_preference(), Preference::default());
    assert_eq!(initial_preference().value, ColorScheme::Dark);
}

#[test]
fn attributes_are_adopted_verbatim() {
    let pref = preference_from_attributes(Some("light"), Some("cookie-present"));
    assert_eq!(pref, Preference { value: ColorScheme::Light, source: PreferenceSource::CookiePresent });

    let pref = preference_from_attributes(Some("dark"), Some("cookie-default"));
    assert_eq!(pref, Preference { value: ColorScheme::Dark, source: PreferenceSource::CookieDefault });
}

#[test]
fn missing_source_assumes_cookie() {
    let pref = preference_from_attributes(Some("light"), None);
    assert_eq!(pref.source, PreferenceSource::CookiePresent);
}

#[test]
fn missing_or_bad_scheme_falls_back_to_default() {
    assert_eq!(preference_from_attributes(None, Some("cookie-present")), Preference::default());
    assert_eq!(preference_from_attributes(Some("sepia"), None), Preference::default());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ColorScheme::Light);
    apply(ColorScheme::Dark);
}
