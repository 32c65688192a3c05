//! The seam between product forms and the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::Product;
use crate::clients::{HttpError, MultipartPayload};
use crate::config::StorageId;

/// Product operations a form session needs from the backend.
///
/// [`CatalogClient`](crate::catalog::CatalogClient) is the production
/// implementation. Tests and alternative front ends can supply their own.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetches one product by storage id (edit-mode hydration).
    async fn fetch_product(&self, storage_id: &StorageId) -> Result<Product, HttpError>;

    /// Creates a product from a multipart payload.
    ///
    /// `Ok(None)` means the server accepted the product but its reply did not
    /// decode as one.
    async fn create_product(
        &self,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError>;

    /// Replaces the product stored under `storage_id`.
    ///
    /// `Ok(None)` has the same meaning as for [`create_product`](Self::create_product).
    async fn update_product(
        &self,
        storage_id: &StorageId,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError>;
}

#[async_trait]
impl<G: ProductGateway + ?Sized> ProductGateway for Arc<G> {
    async fn fetch_product(&self, storage_id: &StorageId) -> Result<Product, HttpError> {
        (**self).fetch_product(storage_id).await
    }

    async fn create_product(
        &self,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError> {
        (**self).create_product(payload).await
    }

    async fn update_product(
        &self,
        storage_id: &StorageId,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError> {
        (**self).update_product(storage_id, payload).await
    }
}
