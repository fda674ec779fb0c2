//! # Credential Store
//!
//! Key-value persistence for exactly two keys: the bearer token and the
//! signed-in user profile. Any collaborator may read them (e.g. to decide an
//! initial render); only the gateway and the session gate clear them.

use parking_lot::RwLock;
use shared_types::{Session, UserProfile};
use tracing::debug;

/// Session-scoped credential persistence.
pub trait CredentialStore: Send + Sync {
    /// The stored bearer token, if a session is established.
    fn token(&self) -> Option<String>;

    /// The stored user profile, if a session is established.
    fn profile(&self) -> Option<UserProfile>;

    /// Persist both keys from an established session.
    fn store(&self, session: &Session);

    /// Clear both keys. Idempotent.
    fn clear(&self);
}

#[derive(Debug, Default)]
struct StoredCredentials {
    token: Option<String>,
    profile: Option<UserProfile>,
}

/// In-memory credential store.
///
/// Stands in for origin-scoped session storage; suitable for the runtime
/// container and for tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<StoredCredentials>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    fn profile(&self) -> Option<UserProfile> {
        self.inner.read().profile.clone()
    }

    fn store(&self, session: &Session) {
        let mut inner = self.inner.write();
        inner.token = Some(session.token.clone());
        inner.profile = Some(session.user.clone());
        debug!(user = %session.user.id, "Credentials stored");
    }

    fn clear(&self) {
        let mut inner = self.inner.write();
        let had_session = inner.token.is_some() || inner.profile.is_some();
        inner.token = None;
        inner.profile = None;
        if had_session {
            debug!("Credentials cleared");
        }
    }
}
