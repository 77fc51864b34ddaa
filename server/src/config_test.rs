use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_bind_addr_and_compression() {
    let config =
        ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("COMPRESSION", "off")]))
            .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert!(!config.compression);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
}

#[test]
fn rejects_bad_compression_flag() {
    let err = ServerConfig::from_lookup(lookup(&[("COMPRESSION", "sometimes")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid boolean for COMPRESSION: \"sometimes\"");
}
