//! Client-wide settings provided through Leptos context.
//!
//! What to do when the session check fails is a deployment decision, so it
//! is configured here instead of being hard-wired in the workspace view.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_WORKSPACE_PATH: &str = "/annotator";
pub const DEFAULT_MEDIA_URL: &str = "https://www.youtube.com/embed/kv4bhktzSZ4";

/// Reaction to a session check that did not authenticate the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckFailurePolicy {
    /// Record the failure and keep rendering the current view logged out.
    #[default]
    StayUnauthenticated,
    /// Record the failure and navigate to the login route.
    RedirectToLogin,
    /// Re-issue the check after `delay_ms`, up to `max_attempts` attempts in
    /// total, then stay unauthenticated.
    Retry { max_attempts: u32, delay_ms: u32 },
}

/// What the session check does after a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureStep {
    RetryAfter { delay_ms: u32 },
    GiveUp,
}

impl CheckFailurePolicy {
    /// Decide the next step after `attempts` attempts have failed.
    pub fn after_failure(self, attempts: u32, retryable: bool) -> FailureStep {
        match self {
            Self::Retry { max_attempts, delay_ms } if retryable && attempts < max_attempts => {
                FailureStep::RetryAfter { delay_ms }
            }
            _ => FailureStep::GiveUp,
        }
    }

    pub fn redirects_to_login(self) -> bool {
        matches!(self, Self::RedirectToLogin)
    }
}

/// Settings shared by every view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub check_failure: CheckFailurePolicy,
    pub login_path: String,
    /// Route the dashboard's "Get Started" leads to.
    pub workspace_path: String,
    /// Embedded media shown in the workspace.
    pub media_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            check_failure: CheckFailurePolicy::default(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            workspace_path: DEFAULT_WORKSPACE_PATH.to_owned(),
            media_url: DEFAULT_MEDIA_URL.to_owned(),
        }
    }
}
