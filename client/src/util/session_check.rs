//! Session bootstrap: the one check-session round-trip a workspace mount may
//! issue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workspace view calls [`run_session_check`] from a spawned local task.
//! The session store's in-flight flag makes overlapping mounts share one
//! request. The answer is always folded into the store, which lives as long
//! as the app; a mount's [`MountToken`] only stops that mount's retries and
//! login redirect once it is torn down.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures go through the configured
//! [`CheckFailurePolicy`]. Whatever happens, the in-flight slot is released
//! before this function returns.

#[cfg(test)]
#[path = "session_check_test.rs"]
mod session_check_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{CheckFailurePolicy, FailureStep};
use crate::net::api::{self, ApiError};
use crate::net::types::CheckSessionResponse;
use crate::state::session::{SessionAction, SessionUpdate, SessionWriter};

/// Cancellation flag tied to one component mount.
#[derive(Clone, Debug, Default)]
pub struct MountToken {
    cancelled: Arc<AtomicBool>,
}

impl MountToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Source of check-session answers.
pub trait SessionChecker {
    fn check(&self) -> impl Future<Output = Result<CheckSessionResponse, ApiError>>;
}

/// Checker backed by `POST /api/auth/check`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSessionChecker;

impl SessionChecker for HttpSessionChecker {
    fn check(&self) -> impl Future<Output = Result<CheckSessionResponse, ApiError>> {
        api::check_session()
    }
}

/// How a session check ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A user was already present or another check was running.
    Skipped,
    Authenticated,
    /// The backend answered but did not authenticate the session.
    Unauthenticated,
    /// No usable answer after the policy's attempts.
    Failed(ApiError),
    /// The mount went away first; the store was still updated but no
    /// follow-up (retry, redirect) applies.
    Cancelled,
}

impl CheckOutcome {
    /// Whether the view should navigate to the login route.
    pub fn redirects_to_login(&self, policy: CheckFailurePolicy) -> bool {
        policy.redirects_to_login() && matches!(self, Self::Unauthenticated | Self::Failed(_))
    }
}

/// Run at most one check-session round-trip and fold the answer into the
/// session store.
///
/// `sleep` is awaited between retries with the policy's delay.
pub async fn run_session_check<C, W, S, F>(
    checker: &C,
    writer: &W,
    token: &MountToken,
    policy: CheckFailurePolicy,
    sleep: S,
) -> CheckOutcome
where
    C: SessionChecker,
    W: SessionWriter,
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    if !writer.try_begin_check() {
        log::debug!("session check skipped: user present or check in flight");
        return CheckOutcome::Skipped;
    }

    let mut attempts = 0_u32;
    loop {
        attempts += 1;
        let error = match checker.check().await {
            Ok(resp) => {
                let update = SessionUpdate::from(resp);
                let outcome = if update.logged {
                    log::info!(
                        "session check: authenticated as {}",
                        update.user.as_ref().map_or("?", |u| u.username.as_str())
                    );
                    CheckOutcome::Authenticated
                } else {
                    log::info!("session check: not authenticated");
                    CheckOutcome::Unauthenticated
                };
                writer.dispatch(SessionAction::CheckResolved(update));
                return settle(outcome, token);
            }
            Err(e) => e,
        };

        let step = if token.is_cancelled() {
            FailureStep::GiveUp
        } else {
            policy.after_failure(attempts, error.retryable())
        };
        match step {
            FailureStep::RetryAfter { delay_ms } => {
                log::warn!("session check attempt {attempts} failed: {error}; retrying in {delay_ms}ms");
                sleep(delay_ms).await;
                if token.is_cancelled() {
                    writer.dispatch(SessionAction::CheckFailed(failure_message(&error)));
                    return CheckOutcome::Cancelled;
                }
            }
            FailureStep::GiveUp => {
                log::warn!("session check failed after {attempts} attempt(s): {error}");
                writer.dispatch(SessionAction::CheckFailed(failure_message(&error)));
                return settle(CheckOutcome::Failed(error), token);
            }
        }
    }
}

/// Outcome as seen by the mount: `Cancelled` once it has been torn down.
fn settle(outcome: CheckOutcome, token: &MountToken) -> CheckOutcome {
    if token.is_cancelled() {
        log::debug!("session check settled after teardown");
        CheckOutcome::Cancelled
    } else {
        outcome
    }
}

/// User-facing text for a failed check.
pub fn failure_message(error: &ApiError) -> String {
    format!("Could not verify your session ({error}).")
}

/// Retry delay for the browser; resolves immediately elsewhere.
#[allow(clippy::unused_async)]
pub async fn browser_sleep(delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
    }
}
