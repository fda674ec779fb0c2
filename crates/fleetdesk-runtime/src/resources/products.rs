//! Product catalog resource over `/products`, including image upload.

use async_trait::async_trait;
use fleetdesk_gateway::{text_parts, FormPart, Gateway};
use fleetdesk_store::EntityResource;
use serde::Serialize;
use shared_types::{normalize_all, GatewayError, Product, ProductFields, WireRecord};
use std::sync::Arc;

/// Payload for adding a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Partial payload for updating a product.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// REST adapter for the `/products` collection.
pub struct ProductsResource {
    gateway: Arc<Gateway>,
}

impl ProductsResource {
    /// Adapter over the shared gateway.
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Upload a product image as a multipart form.
    ///
    /// `caption` rides along as a text field when non-empty; empty values
    /// are omitted rather than sent as empty strings.
    pub async fn upload_image(
        &self,
        id: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        caption: &str,
    ) -> Result<Product, GatewayError> {
        let mut parts = text_parts(&[("caption", caption)]);
        parts.push(FormPart::file("image", file_name, content_type, bytes));

        let record: WireRecord<ProductFields> = self
            .gateway
            .post_multipart(&format!("/products/{id}/image"), parts)
            .await?;
        record.normalize().map_err(Into::into)
    }
}

#[async_trait]
impl EntityResource for ProductsResource {
    type Record = Product;
    type CreateInput = CreateProduct;
    type UpdateInput = UpdateProduct;

    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError> {
        let records: Vec<WireRecord<ProductFields>> = self.gateway.get("/products").await?;
        normalize_all(records).map_err(Into::into)
    }

    async fn fetch_one(&self, id: &str) -> Result<Product, GatewayError> {
        let record: WireRecord<ProductFields> =
            self.gateway.get(&format!("/products/{id}")).await?;
        record.normalize().map_err(Into::into)
    }

    async fn create(&self, input: CreateProduct) -> Result<Product, GatewayError> {
        let record: WireRecord<ProductFields> = self.gateway.post("/products", &input).await?;
        record.normalize().map_err(Into::into)
    }

    async fn update(&self, id: &str, input: UpdateProduct) -> Result<Product, GatewayError> {
        let record: WireRecord<ProductFields> = self
            .gateway
            .patch(&format!("/products/{id}"), &input)
            .await?;
        record.normalize().map_err(Into::into)
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        self.gateway.delete(&format!("/products/{id}")).await
    }
}
