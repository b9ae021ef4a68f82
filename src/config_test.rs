use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_env_gives_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert_eq!(cfg.backend_url, None);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", " "), ("GENOCROWD_BIND", ""), ("GENOCROWD_BACKEND_URL", "  ")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert_eq!(cfg.backend_url, None);
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("GENOCROWD_BIND", "127.0.0.1"),
        ("GENOCROWD_BACKEND_URL", "http://localhost:5000/"),
        ("GENOCROWD_PROXY_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.backend_url.as_deref(), Some("http://localhost:5000"));
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn bad_port_is_rejected() {
    assert_eq!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(config_from(&[("PORT", "0")]), Err(ConfigError::InvalidPort("0".to_owned())));
    assert_eq!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn bad_timeout_is_rejected() {
    assert_eq!(
        config_from(&[("GENOCROWD_PROXY_TIMEOUT_SECS", "0")]),
        Err(ConfigError::InvalidTimeout("0".to_owned()))
    );
}

#[test]
fn non_http_backend_is_rejected() {
    let err = config_from(&[("GENOCROWD_BACKEND_URL", "localhost:5000")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("localhost:5000".to_owned()));
    assert_eq!(err.to_string(), "GENOCROWD_BACKEND_URL must be an http(s) URL, got \"localhost:5000\"");
}
