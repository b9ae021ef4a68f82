//! Shared session configuration for the current browser user.
//!
//! DESIGN
//! ======
//! Many views read one authoritative session record; exactly one entry point
//! writes it. Writers describe what happened as a [`SessionAction`] and the
//! store folds it into [`SessionState`] with [`SessionState::reduce`]. The
//! in-flight check guard lives in the same record so test-and-set happens in
//! one update.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{CheckSessionResponse, UserIdentity};

/// Current user identity and authentication status.
///
/// Invariant: `logged` implies `user.is_some()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub user: Option<UserIdentity>,
    pub logged: bool,
}

impl SessionConfig {
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// A requested replacement of the session configuration.
///
/// The user is always replaced wholesale; profile fields are never merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionUpdate {
    pub user: Option<UserIdentity>,
    pub logged: bool,
}

impl SessionUpdate {
    /// Update for a freshly authenticated user.
    pub fn logged_in(user: UserIdentity) -> Self {
        Self { user: Some(user), logged: true }
    }

    fn into_config(self) -> SessionConfig {
        let logged = self.logged && self.user.is_some();
        SessionConfig { user: self.user, logged }
    }
}

impl From<CheckSessionResponse> for SessionUpdate {
    /// A response reporting an error never carries its user forward.
    fn from(resp: CheckSessionResponse) -> Self {
        let logged = resp.is_authenticated();
        let user = if resp.error { None } else { resp.user };
        Self { user, logged }
    }
}

/// Progress of the check-session round-trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CheckStatus {
    #[default]
    Idle,
    InFlight,
    /// The last check gave up; carries a user-facing message.
    Failed(String),
}

/// Commands accepted by the session store.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    CheckStarted,
    CheckResolved(SessionUpdate),
    CheckFailed(String),
    /// Direct configuration replacement requested by a child view.
    Merge(SessionUpdate),
}

/// Everything the session store holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub config: SessionConfig,
    pub check: CheckStatus,
}

impl SessionState {
    /// A check is only worth issuing with no user and none already running.
    pub fn can_begin_check(&self) -> bool {
        self.config.user.is_none() && self.check != CheckStatus::InFlight
    }

    /// Mark a check as started if allowed. Returns whether it was.
    pub fn begin_check(&mut self) -> bool {
        if !self.can_begin_check() {
            return false;
        }
        self.reduce(SessionAction::CheckStarted);
        true
    }

    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::CheckStarted => self.check = CheckStatus::InFlight,
            SessionAction::CheckResolved(update) => {
                self.config = update.into_config();
                self.check = CheckStatus::Idle;
            }
            SessionAction::CheckFailed(message) => self.check = CheckStatus::Failed(message),
            SessionAction::Merge(update) => self.config = update.into_config(),
        }
    }
}

/// Write side of the session record, as seen by the session check.
pub trait SessionWriter {
    /// Atomically claim the in-flight slot. `false` means "do not check".
    fn try_begin_check(&self) -> bool;
    fn dispatch(&self, action: SessionAction);
}

/// Reactive session store provided to every view via context.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Tracked read of the session configuration.
    pub fn config(&self) -> SessionConfig {
        self.state.with(|s| s.config.clone())
    }

    /// Tracked read of the check status.
    pub fn check_status(&self) -> CheckStatus {
        self.state.with(|s| s.check.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionWriter for SessionStore {
    fn try_begin_check(&self) -> bool {
        self.state
            .try_maybe_update(|s| {
                let claimed = s.begin_check();
                (claimed, claimed)
            })
            .unwrap_or(false)
    }

    fn dispatch(&self, action: SessionAction) {
        log::debug!("session action: {action:?}");
        self.state.update(|s| s.reduce(action));
    }
}
