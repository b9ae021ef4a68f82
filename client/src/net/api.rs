//! REST API helpers for communicating with the annotation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so a failed session check
//! degrades to an unauthenticated view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::CheckSessionResponse;

pub const CHECK_SESSION_ENDPOINT: &str = "/api/auth/check";

/// Failures of a backend round-trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with an unexpected HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// No browser networking in this build (SSR or native).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether repeating the same request could plausibly succeed.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(408 | 429 | 500..=599))
    }
}

/// Ask the backend whether the browser's session cookie still maps to a user.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, unexpected status, or an
/// undecodable body.
pub async fn check_session() -> Result<CheckSessionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHECK_SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_check_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Interpret a check-session HTTP answer.
///
/// 2xx bodies must decode. 401/403 are an authentication answer: the body is
/// used when it decodes and an anonymous response is synthesized otherwise.
/// Any other status is an error.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_check_response(status: u16, body: &str) -> Result<CheckSessionResponse, ApiError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string())),
        401 | 403 => Ok(serde_json::from_str(body).unwrap_or_else(|_| anonymous_response(status))),
        other => Err(ApiError::Status(other)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn anonymous_response(status: u16) -> CheckSessionResponse {
    CheckSessionResponse {
        user: None,
        error: true,
        error_message: format!("not authenticated ({status})"),
    }
}
