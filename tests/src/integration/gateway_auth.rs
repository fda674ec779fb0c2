//! # Gateway Authentication Flow
//!
//! Bearer propagation and unauthorized-response recovery, exercised through
//! the fully wired container over a scripted transport.

#[cfg(test)]
mod tests {
    use crate::support::{login_body, ScriptedTransport};
    use fleetdesk_runtime::Container;
    use fleetdesk_session::SessionState;
    use shared_types::{GatewayError, StoreError};

    #[tokio::test]
    async fn test_login_attaches_bearer_to_subsequent_requests() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, &login_body("tok-42", "u-1", "administrator"));
        let session = container
            .auth
            .login("ana@example.com", "secret")
            .await
            .expect("login");
        assert_eq!(session.token, "tok-42");
        assert_eq!(container.gate.state(), SessionState::Authenticated);

        transport.respond(200, "[]");
        container.users.get_all(false).await.expect("users");

        let request = transport.last_request();
        assert_eq!(request.path, "/users");
        assert_eq!(request.bearer.as_deref(), Some("tok-42"));
    }

    #[tokio::test]
    async fn test_requests_before_login_carry_no_bearer() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, "[]");
        container.products.get_all(false).await.expect("products");
        assert!(transport.last_request().bearer.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_response_drops_session() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, &login_body("tok-1", "u-1", "support"));
        container
            .auth
            .login("ana@example.com", "secret")
            .await
            .expect("login");

        // Token revoked server-side; the next request comes back 401.
        transport.respond(401, "{}");
        let result = container.clients.get_all(false).await;
        assert!(matches!(
            result,
            Err(StoreError::Gateway(GatewayError::AuthenticationRejected))
        ));

        assert_eq!(container.gate.state(), SessionState::Anonymous);
        assert!(container.credentials.token().is_none());

        // The follow-up request goes out unauthenticated, not with the
        // revoked token.
        transport.respond(200, "[]");
        container.clients.get_all(false).await.expect("clients");
        assert!(transport.last_request().bearer.is_none());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_gate_untouched() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(401, "{}");
        let result = container.auth.login("ana@example.com", "wrong").await;
        assert_eq!(result.unwrap_err(), GatewayError::AuthenticationRejected);

        // No session was ever established; the gate has not resolved.
        assert_eq!(container.gate.state(), SessionState::Loading);
        assert!(!container.gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_validation_rejection_surfaces_server_message() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, "[]");
        container.users.get_all(false).await.expect("loaded");

        transport.respond(422, r#"{"message":"email already taken"}"#);
        let result = container
            .users
            .update(
                "u-1",
                fleetdesk_runtime::UpdateUser {
                    email: Some("dup@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(StoreError::Gateway(GatewayError::ValidationRejected { message }))
                if message == "email already taken"
        ));
    }
}
