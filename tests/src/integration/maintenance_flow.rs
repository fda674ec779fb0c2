//! # Maintenance and Catalog Flow
//!
//! Paginated listing, schedule conversion, and product image upload through
//! the container's resources.

#[cfg(test)]
mod tests {
    use crate::support::ScriptedTransport;
    use fleetdesk_gateway::{FormValue, RequestBody, Verb};
    use fleetdesk_runtime::Container;
    use shared_types::{PageRequest, RequestStatus, ServiceKind};

    fn maintenance_page_body() -> &'static str {
        r#"{
            "data": [
                {"_id": "m-1", "clientId": "c-1", "service": "maintenance", "status": "pending"},
                {"id": "m-2", "clientId": "c-2", "service": "installation", "status": "approved",
                 "description": "brake pads", "requestedDate": "2026-09-01"}
            ],
            "pagination": {"total": 2, "page": 1, "limit": 10, "totalPages": 1}
        }"#
    }

    #[tokio::test]
    async fn test_page_normalizes_records_and_sends_query() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(200, maintenance_page_body());
        let page = container
            .maintenance_resource
            .page(PageRequest { page: 1, limit: 10 })
            .await
            .expect("page");

        let request = transport.last_request();
        assert_eq!(request.path, "/maintenance");
        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );

        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.data.len(), 2);
        // `_id` alias accepted on the wire, canonical `id` in the domain.
        assert_eq!(page.data[0].id, "m-1");
        assert_eq!(page.data[0].service, ServiceKind::Maintenance);
        assert_eq!(page.data[1].status, RequestStatus::Approved);
        assert_eq!(page.data[1].requested_date.as_deref(), Some("2026-09-01"));
    }

    #[tokio::test]
    async fn test_store_fetch_all_requests_oversized_page() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(
            200,
            r#"{"data": [], "pagination": {"total": 0, "page": 1, "limit": 1000, "totalPages": 0}}"#,
        );
        let all = container.maintenance.get_all(false).await.expect("loaded");
        assert!(all.is_empty());

        let request = transport.last_request();
        assert_eq!(request.path, "/maintenance");
        assert!(request
            .query
            .contains(&("limit".to_string(), "1000".to_string())));
    }

    #[tokio::test]
    async fn test_convert_to_schedules() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(
            200,
            r#"[
                {"_id": "s-1", "maintenanceId": "m-2", "scheduledFor": "2026-09-01T09:00:00Z"},
                {"_id": "s-2", "maintenanceId": "m-2", "scheduledFor": "2026-09-02T09:00:00Z",
                 "technicianId": "u-7"}
            ]"#,
        );
        let schedules = container
            .maintenance_resource
            .convert_to_schedules("m-2")
            .await
            .expect("converted");

        let request = transport.last_request();
        assert_eq!(request.verb, Verb::Post);
        assert_eq!(request.path, "/maintenance/m-2/create-schedules");

        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].maintenance_id, "m-2");
        assert_eq!(schedules[1].technician_id.as_deref(), Some("u-7"));
    }

    #[tokio::test]
    async fn test_upload_image_sends_multipart_form() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(
            200,
            r#"{"id": "p-1", "name": "Oil filter", "description": "OEM", "price": 25.0,
                "imageUrl": "/uploads/p-1.png"}"#,
        );
        let product = container
            .products_resource
            .upload_image("p-1", "filter.png", "image/png", vec![1, 2, 3], "front view")
            .await
            .expect("uploaded");
        assert_eq!(product.image_url.as_deref(), Some("/uploads/p-1.png"));

        let request = transport.last_request();
        assert_eq!(request.path, "/products/p-1/image");
        let RequestBody::Multipart(parts) = request.body else {
            panic!("expected multipart body");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "caption");
        assert!(matches!(&parts[0].value, FormValue::Text(t) if t == "front view"));
        assert_eq!(parts[1].name, "image");
        assert!(matches!(
            &parts[1].value,
            FormValue::File { file_name, content_type, bytes }
                if file_name == "filter.png" && content_type == "image/png" && bytes == &vec![1, 2, 3]
        ));
    }

    #[tokio::test]
    async fn test_upload_image_omits_empty_caption() {
        let transport = ScriptedTransport::new();
        let container = Container::with_transport(transport.clone());

        transport.respond(
            200,
            r#"{"id": "p-2", "name": "Wiper", "description": "", "price": 9.5}"#,
        );
        container
            .products_resource
            .upload_image("p-2", "wiper.jpg", "image/jpeg", vec![9], "")
            .await
            .expect("uploaded");

        let RequestBody::Multipart(parts) = transport.last_request().body else {
            panic!("expected multipart body");
        };
        let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["image"]);
    }
}
