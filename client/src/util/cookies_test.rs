use super::*;

// =============================================================
// serialize
// =============================================================

#[test]
fn serialize_writes_root_path_and_max_age() {
    let raw = serialize("mantine-color-scheme", "light", Duration::seconds(2_592_000));
    assert_eq!(raw, "mantine-color-scheme=light; Path=/; Max-Age=2592000");
}

#[test]
fn serialize_is_site_wide_from_nested_pages() {
    let raw = serialize("mantine-color-scheme", "dark", Duration::days(30));
    let parsed = Cookie::parse(raw).unwrap();
    assert_eq!(parsed.path(), Some("/"));
    assert_eq!(parsed.domain(), None);
}

// =============================================================
// RequestCookies
// =============================================================

#[test]
fn request_cookies_reads_named_value() {
    let jar = RequestCookies::from_header_values(["session=abc; mantine-color-scheme=light"]);
    assert_eq!(jar.read("mantine-color-scheme").as_deref(), Some("light"));
    assert_eq!(jar.read("session").as_deref(), Some("abc"));
}

#[test]
fn request_cookies_missing_name_is_none() {
    let jar = RequestCookies::from_header_values(["session=abc"]);
    assert_eq!(jar.read("mantine-color-scheme"), None);
}

#[test]
fn request_cookies_empty_header_is_empty() {
    let jar = RequestCookies::from_header_values([""]);
    assert_eq!(jar.read("anything"), None);
}

#[test]
fn request_cookies_merges_multiple_headers() {
    let jar = RequestCookies::from_header_values(["a=1", "b=2"]);
    assert_eq!(jar.read("a").as_deref(), Some("1"));
    assert_eq!(jar.read("b").as_deref(), Some("2"));
}

#[test]
fn request_cookies_first_occurrence_wins() {
    let jar = RequestCookies::from_header_values(["theme=dark; theme=light"]);
    assert_eq!(jar.read("theme").as_deref(), Some("dark"));
}

#[test]
fn request_cookies_reject_writes() {
    let mut jar = RequestCookies::default();
    let err = jar.write("theme", "dark", Duration::seconds(1)).unwrap_err();
    assert_eq!(err, CookieError::ReadOnly);
}

#[cfg(feature = "ssr")]
#[test]
fn request_cookies_from_header_map() {
    let mut headers = http::HeaderMap::new();
    headers.append(http::header::COOKIE, http::HeaderValue::from_static("a=1"));
    headers.append(http::header::COOKIE, http::HeaderValue::from_static("mantine-color-scheme=light"));
    let jar = RequestCookies::from_headers(&headers);
    assert_eq!(jar.read("mantine-color-scheme").as_deref(), Some("light"));
}

// =============================================================
// MemoryCookies
// =============================================================

#[test]
fn memory_cookies_write_overwrites_and_records_max_age() {
    let mut jar = MemoryCookies::new().with("theme", "dark");
    jar.write("theme", "light", Duration::days(30)).unwrap();
    let stored = jar.get("theme").unwrap();
    assert_eq!(stored.value, "light");
    assert_eq!(stored.max_age, Duration::seconds(2_592_000));
}

#[test]
fn memory_cookies_header_value_round_trips_through_request_cookies() {
    let jar = MemoryCookies::new().with("b", "2").with("a", "1");
    assert_eq!(jar.to_header_value(), "a=1; b=2");
    let parsed = RequestCookies::from_header_values([jar.to_header_value().as_str()]);
    assert_eq!(parsed.read("b").as_deref(), Some("2"));
}

// =============================================================
// DocumentCookies
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_cookies_are_inert_outside_the_browser() {
    let mut jar = DocumentCookies;
    assert!(jar.write("theme", "light", Duration::seconds(10)).is_ok());
    assert_eq!(jar.read("theme"), None);
}

#[test]
fn cookie_error_messages() {
    assert_eq!(CookieError::ReadOnly.to_string(), "cookie store is read-only");
    assert_eq!(
        CookieError::Rejected("SecurityError".into()).to_string(),
        "cookie write rejected: SecurityError"
    );
}
