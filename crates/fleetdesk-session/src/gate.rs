//! # Session Gate
//!
//! Authentication and authorization answers derived from the credential
//! store. Because the gateway clears the store unilaterally when it observes
//! an authentication-rejected response, the gate re-derives its answers from
//! the store on every call instead of carrying its own copy of the session.

use fleetdesk_gateway::CredentialStore;
use shared_types::{Role, Session};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Resolution state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Initial resolution has not run yet.
    Loading,
    /// Credential and profile are both present.
    Authenticated,
    /// Resolved with no session, or session since invalidated.
    Anonymous,
}

/// Derives authentication/authorization state for route-guarding
/// collaborators.
pub struct SessionGate {
    credentials: Arc<dyn CredentialStore>,
    resolved: AtomicBool,
}

impl SessionGate {
    /// Gate over the shared credential store, starting in `Loading`.
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            credentials,
            resolved: AtomicBool::new(false),
        }
    }

    /// Perform the one-time initial resolution (e.g. at startup, from
    /// persisted credentials). Idempotent; there is no way back to
    /// `Loading` afterwards.
    pub fn resolve(&self) -> SessionState {
        self.resolved.store(true, Ordering::Release);
        let state = self.state();
        debug!(?state, "Session resolved");
        state
    }

    /// Establish a session after a successful login. Marks the gate
    /// resolved.
    pub fn establish(&self, session: &Session) {
        self.credentials.store(session);
        self.resolved.store(true, Ordering::Release);
        debug!(user = %session.user.id, "Session established");
    }

    /// Invalidate the session on explicit logout. (Gateway-observed
    /// authentication failures clear the credential store directly; the
    /// gate picks that up on the next read.)
    pub fn invalidate(&self) {
        self.credentials.clear();
        self.resolved.store(true, Ordering::Release);
        debug!("Session invalidated");
    }

    /// Current resolution state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if !self.resolved.load(Ordering::Acquire) {
            return SessionState::Loading;
        }
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// True iff both a credential and a user profile are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.token().is_some() && self.credentials.profile().is_some()
    }

    /// True when `required` is empty (no restriction), else true iff a user
    /// is present and its role is a member of `required`.
    #[must_use]
    pub fn is_authorized(&self, required: &[Role]) -> bool {
        if required.is_empty() {
            return true;
        }
        self.credentials
            .profile()
            .is_some_and(|profile| required.contains(&profile.role))
    }
}
