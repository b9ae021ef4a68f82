//! Wire DTOs for the annotation backend's auth endpoints.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: anonymous sessions come back as
//! `user: {}` and older deployments omit `error`. Deserialization here is
//! lenient about structure but fails closed on authentication, so downstream
//! state never sees a half-populated user.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An authenticated annotator as returned by the backend.
///
/// Only `username` is interpreted by the client. Every other profile field
/// (`email`, `isAdmin`, `role`, `created`, ...) is carried as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Login name; also the key for the identity glyph.
    pub username: String,
    /// Remaining profile fields, untouched.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl UserIdentity {
    /// Identity with a username and no extra profile fields.
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), profile: Map::new() }
    }

    /// Build an identity from an arbitrary JSON value.
    ///
    /// Returns `None` unless `value` is an object carrying a non-blank
    /// string `username`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        let username = match fields.remove("username") {
            Some(Value::String(name)) if !name.trim().is_empty() => name,
            _ => return None,
        };
        Some(Self { username, profile: fields })
    }

    pub fn email(&self) -> Option<&str> {
        self.profile.get("email").and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<&str> {
        self.profile.get("role").and_then(Value::as_str)
    }

    pub fn is_admin(&self) -> bool {
        self.profile.get("isAdmin").and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Response body of `POST /api/auth/check`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckSessionResponse {
    /// Current user, or `None` when absent, `null`, `{}` or unusable.
    #[serde(default, deserialize_with = "deserialize_optional_user")]
    pub user: Option<UserIdentity>,
    /// Backend-reported failure. Missing or non-boolean counts as `true`.
    #[serde(default = "default_error_flag", deserialize_with = "deserialize_error_flag")]
    pub error: bool,
    /// Backend explanation; `null` or non-string reads as empty.
    #[serde(default, rename = "errorMessage", deserialize_with = "deserialize_error_message")]
    pub error_message: String,
}

impl CheckSessionResponse {
    /// Whether this response authenticates the browser session.
    pub fn is_authenticated(&self) -> bool {
        !self.error && self.user.is_some()
    }
}

fn default_error_flag() -> bool {
    true
}

fn deserialize_optional_user<'de, D>(deserializer: D) -> Result<Option<UserIdentity>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(UserIdentity::from_value))
}

fn deserialize_error_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_bool().unwrap_or(true))
}

fn deserialize_error_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_str().map(str::to_owned).unwrap_or_default())
}
