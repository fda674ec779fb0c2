//! # Test Support
//!
//! Shared doubles for driving the data layer without a server: a scripted
//! transport that replays queued responses below the gateway, and a stalling
//! resource that parks fetch-all until the test releases it.

use async_trait::async_trait;
use fleetdesk_gateway::{HttpTransport, RequestSpec, ResponseSpec, TransportError};
use fleetdesk_store::EntityResource;
use parking_lot::Mutex;
use shared_types::{GatewayError, Role, User};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Transport double: records every request, replays queued responses in
/// order. An empty queue fails the request so a test that under-scripts
/// surfaces immediately.
pub struct ScriptedTransport {
    requests: Mutex<Vec<RequestSpec>>,
    responses: Mutex<VecDeque<Result<ResponseSpec, TransportError>>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    /// Queue a JSON response.
    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().push_back(Ok(ResponseSpec {
            status,
            body: body.as_bytes().to_vec(),
        }));
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> RequestSpec {
        self.requests.lock().last().cloned().expect("no request executed")
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: RequestSpec) -> Result<ResponseSpec, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(TransportError::Connection(
                "no response scripted".into(),
            )))
    }
}

/// Build a user fixture.
pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        role: Role::Support,
    }
}

/// Canned body of a successful `/users/login` response.
pub fn login_body(token: &str, user_id: &str, role: &str) -> String {
    format!(
        r#"{{"token":"{token}","user":{{"id":"{user_id}","name":"Ana","email":"ana@example.com","role":"{role}"}}}}"#
    )
}

/// Resource double whose fetch-all parks on a semaphore until the test
/// grants a permit, for exercising in-flight coalescing.
pub struct StallingUsers {
    records: Vec<User>,
    gate: Semaphore,
    pub fetch_count: AtomicUsize,
}

impl StallingUsers {
    pub fn with(records: Vec<User>) -> Arc<Self> {
        Arc::new(Self {
            records,
            gate: Semaphore::new(0),
            fetch_count: AtomicUsize::new(0),
        })
    }

    /// Let one parked fetch-all complete.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl EntityResource for StallingUsers {
    type Record = User;
    type CreateInput = String;
    type UpdateInput = String;

    async fn fetch_all(&self) -> Result<Vec<User>, GatewayError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| GatewayError::NetworkFailure("gate closed".into()))?;
        // Consume the permit so every fetch needs its own release.
        permit.forget();
        Ok(self.records.clone())
    }

    async fn fetch_one(&self, id: &str) -> Result<User, GatewayError> {
        self.records
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("/users/{id}")))
    }

    async fn create(&self, name: String) -> Result<User, GatewayError> {
        Ok(user("created", &name))
    }

    async fn update(&self, id: &str, name: String) -> Result<User, GatewayError> {
        Ok(user(id, &name))
    }

    async fn remove(&self, _id: &str) -> Result<(), GatewayError> {
        Ok(())
    }
}
