//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid GENOCROWD_PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    #[error("GENOCROWD_BACKEND_URL must be an http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: String,
    pub port: u16,
    /// Annotation backend that `/api/*` is forwarded to.
    pub backend_url: Option<String>,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GENOCROWD_BIND`: default `0.0.0.0`
    /// - `GENOCROWD_BACKEND_URL`: no forwarding when absent
    /// - `GENOCROWD_PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let bind = lookup("GENOCROWD_BIND")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let backend_url = parse_backend_url(lookup("GENOCROWD_BACKEND_URL").as_deref())?;
        let proxy_timeout = parse_timeout(lookup("GENOCROWD_PROXY_TIMEOUT_SECS").as_deref())?;
        Ok(Self { bind, port, backend_url, proxy_timeout })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS)),
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::InvalidTimeout(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}
