use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8000"),
        ("BACKEND_URL", "https://api.example.test/"),
        ("PROXY_TIMEOUT_SECS", "42"),
        ("PROXY_CONNECT_TIMEOUT_SECS", "3"),
        ("MAX_UPLOAD_BYTES", "1024"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 42, connect_secs: 3 });
    assert_eq!(cfg.max_upload_bytes, 1024);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("BACKEND_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_number_is_an_error() {
    assert_eq!(
        config_from(&[("PORT", "eighty")]),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() })
    );
}

#[test]
fn backend_url_needs_http_scheme() {
    assert_eq!(
        config_from(&[("BACKEND_URL", "localhost:8080")]),
        Err(ConfigError::BackendUrl("localhost:8080".to_owned()))
    );
}
