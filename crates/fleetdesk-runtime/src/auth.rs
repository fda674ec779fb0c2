//! # Authentication API
//!
//! Login and logout against `/users/login`, feeding the session gate. The
//! server returns a bearer token plus the signed-in user's record; both are
//! folded into a [`Session`] and handed to the gate, which persists them in
//! the shared credential store.

use fleetdesk_gateway::Gateway;
use fleetdesk_session::SessionGate;
use serde::{Deserialize, Serialize};
use shared_types::{GatewayError, Session, User, UserFields, UserProfile, WireRecord};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: WireRecord<UserFields>,
}

/// Sign-in and sign-out operations.
pub struct AuthApi {
    gateway: Arc<Gateway>,
    gate: Arc<SessionGate>,
}

impl AuthApi {
    /// Auth operations over the shared gateway and session gate.
    pub fn new(gateway: Arc<Gateway>, gate: Arc<SessionGate>) -> Self {
        Self { gateway, gate }
    }

    /// Exchange credentials for a session and establish it.
    ///
    /// Wrong credentials surface as the server's validation or
    /// authentication rejection; the gate is only touched on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, GatewayError> {
        let response: LoginResponse = self
            .gateway
            .post("/users/login", &LoginRequest { email, password })
            .await?;

        let user: User = response.user.normalize()?;
        let session = Session {
            token: response.token,
            user: UserProfile::from(user),
        };
        self.gate.establish(&session);
        info!(user = %session.user.id, "Signed in");
        Ok(session)
    }

    /// Drop the current session. Local only; the server keeps no session
    /// state for bearer tokens.
    pub fn logout(&self) {
        self.gate.invalidate();
        info!("Signed out");
    }
}
