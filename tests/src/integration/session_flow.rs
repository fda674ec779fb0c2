//! # Session Flow
//!
//! Full sign-in/sign-out cycle and role-based authorization answers through
//! the container.

#[cfg(test)]
mod tests {
    use crate::support::{login_body, ScriptedTransport};
    use fleetdesk_runtime::Container;
    use fleetdesk_session::SessionState;
    use shared_types::Role;

    #[tokio::test]
    async fn test_startup_resolution_without_persisted_session() {
        let container = Container::with_transport(ScriptedTransport::new());

        assert_eq!(container.gate.state(), SessionState::Loading);
        assert_eq!(container.gate.resolve(), SessionState::Anonymous);
        assert_eq!(container.gate.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_logout_cycle() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, &login_body("tok-1", "u-1", "administrator"));
        let session = container
            .auth
            .login("ana@example.com", "secret")
            .await
            .expect("login");
        assert_eq!(session.user.role, Role::Administrator);
        assert_eq!(container.gate.state(), SessionState::Authenticated);

        container.auth.logout();
        assert_eq!(container.gate.state(), SessionState::Anonymous);
        assert!(container.credentials.token().is_none());

        // Post-logout traffic is unauthenticated.
        transport.respond(200, "[]");
        container.products.get_all(false).await.expect("products");
        assert!(transport.last_request().bearer.is_none());
    }

    #[tokio::test]
    async fn test_role_authorization_after_login() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, &login_body("tok-1", "u-2", "technician"));
        container
            .auth
            .login("rui@example.com", "secret")
            .await
            .expect("login");

        assert!(container.gate.is_authorized(&[]));
        assert!(container.gate.is_authorized(&[Role::Technician]));
        assert!(container
            .gate
            .is_authorized(&[Role::Administrator, Role::Technician]));
        assert!(!container.gate.is_authorized(&[Role::Administrator]));

        container.auth.logout();
        assert!(!container.gate.is_authorized(&[Role::Technician]));
        assert!(container.gate.is_authorized(&[]), "unrestricted stays open");
    }
}
