//! REST client for the catalog API.
//!
//! [`CatalogClient`] wraps [`HttpClient`] with one method per endpoint the
//! admin panel uses.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::catalog::{Category, Product, ProductGateway, TopCategory};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, MultipartPayload};
use crate::config::{AdminConfig, StorageId};

/// Client for the catalog API's product and category endpoints.
///
/// `CatalogClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_admin::AdminConfig;
/// use storefront_admin::catalog::CatalogClient;
///
/// let client = CatalogClient::new(&AdminConfig::default())?;
///
/// let products = client.list_products().await?;
/// let categories = client.list_child_categories().await?;
/// ```
#[derive(Debug)]
pub struct CatalogClient {
    http_client: HttpClient,
}

// Verify CatalogClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogClient>();
};

impl CatalogClient {
    /// Creates a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &AdminConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the public URL of a product's stored featured image.
    #[must_use]
    pub fn featured_image_url(&self, file_name: &str) -> String {
        self.http_client.base_url().join(&format!(
            "uploads/featured/{}",
            urlencoding::encode(file_name)
        ))
    }

    /// Lists all products.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_products(&self) -> Result<Vec<Product>, HttpError> {
        self.get_json("products").await
    }

    /// Fetches a product by storage id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn get_product(&self, storage_id: &StorageId) -> Result<Product, HttpError> {
        self.get_json(&Self::product_path(storage_id)).await
    }

    /// Creates a product (`POST /products/add`).
    ///
    /// Returns `Ok(None)` when the server accepted the product but replied
    /// with a body that is not a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or non-2xx status.
    pub async fn create_product(
        &self,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError> {
        let path = "products/add";
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(payload)
            .build()?;
        let response = self.http_client.request(request).await?;
        Ok(Self::saved_product(&response, path))
    }

    /// Updates a product (`PUT /products/{id}`).
    ///
    /// Returns `Ok(None)` when the server accepted the update but replied
    /// with a body that is not a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or non-2xx status.
    pub async fn update_product(
        &self,
        storage_id: &StorageId,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError> {
        let path = Self::product_path(storage_id);
        let request = HttpRequest::builder(HttpMethod::Put, path.as_str())
            .body(payload)
            .build()?;
        let response = self.http_client.request(request).await?;
        Ok(Self::saved_product(&response, &path))
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or non-2xx status.
    pub async fn delete_product(&self, storage_id: &StorageId) -> Result<(), HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, Self::product_path(storage_id)).build()?;
        self.http_client.request(request).await?;
        tracing::info!(storage_id = %storage_id, "Deleted product");
        Ok(())
    }

    /// Lists parent categories.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_parent_categories(&self) -> Result<Vec<Category>, HttpError> {
        self.get_json("parentcategories").await
    }

    /// Lists child categories, the only valid targets for a product's category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_child_categories(&self) -> Result<Vec<Category>, HttpError> {
        self.get_json("childcategories").await
    }

    /// Creates or updates a top category.
    ///
    /// A category without a storage id is created with `POST`; one with a
    /// storage id is replaced with `PUT`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn save_top_category(&self, category: &TopCategory) -> Result<TopCategory, HttpError> {
        let (method, path) = category.storage_id.as_ref().map_or_else(
            || (HttpMethod::Post, "api/v1/topcategories".to_string()),
            |id| (HttpMethod::Put, format!("api/v1/topcategories/{}", id.path_segment())),
        );

        let body = serde_json::to_value(category).map_err(|e| HttpError::Decode {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let request = HttpRequest::builder(method, path.as_str()).body(body).build()?;
        let response = self.http_client.request(request).await?;

        // Some deployments answer with a bare acknowledgement; keep the input then.
        Ok(response
            .json::<TopCategory>(&path)
            .unwrap_or_else(|_| category.clone()))
    }

    fn product_path(storage_id: &StorageId) -> String {
        format!("products/{}", storage_id.path_segment())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        let response = self.http_client.request(request).await?;
        response.json(path)
    }

    /// Decodes the product from a 2xx save, accepting either a bare product
    /// or `{"product": {...}}`.
    ///
    /// The save has already happened, so a body that does not decode is
    /// logged and dropped rather than reported as a failure.
    fn saved_product(response: &HttpResponse, path: &str) -> Option<Product> {
        let body = match response.body.get("product") {
            Some(product) if product.is_object() => product.clone(),
            _ => response.body.clone(),
        };
        match serde_json::from_value(body) {
            Ok(product) => Some(product),
            Err(error) => {
                tracing::warn!(
                    path = %path,
                    code = response.code,
                    error = %error,
                    "Saved product but could not decode the response body"
                );
                None
            }
        }
    }
}

#[async_trait]
impl ProductGateway for CatalogClient {
    async fn fetch_product(&self, storage_id: &StorageId) -> Result<Product, HttpError> {
        self.get_product(storage_id).await
    }

    async fn create_product(
        &self,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError> {
        Self::create_product(self, payload).await
    }

    async fn update_product(
        &self,
        storage_id: &StorageId,
        payload: MultipartPayload,
    ) -> Result<Option<Product>, HttpError> {
        Self::update_product(self, storage_id, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    #[test]
    fn test_featured_image_url() {
        let config = AdminConfig::builder()
            .base_url(BaseUrl::new("https://cdn-api.example.com").unwrap())
            .build()
            .unwrap();
        let client = CatalogClient::new(&config).unwrap();

        assert_eq!(
            client.featured_image_url("linen shirt.png"),
            "https://cdn-api.example.com/uploads/featured/linen%20shirt.png"
        );
    }

    #[test]
    fn test_product_path_encodes_storage_id() {
        let id = StorageId::new("665f/1c").unwrap();
        assert_eq!(CatalogClient::product_path(&id), "products/665f%2F1c");
    }

    #[test]
    fn test_saved_product_accepts_wrapped_body() {
        let response = HttpResponse::new(
            201,
            std::collections::HashMap::new(),
            serde_json::json!({"message": "created", "product": {"_id": "p1", "itemName": "Tee"}}),
        );
        let product = CatalogClient::saved_product(&response, "products/add").unwrap();
        assert_eq!(product.item_name, "Tee");
    }

    #[test]
    fn test_saved_product_drops_unexpected_shape() {
        let response = HttpResponse::new(
            200,
            std::collections::HashMap::new(),
            serde_json::json!({"_id": "p1", "id": 100, "itemName": "Linen Shirt"}),
        );
        assert!(CatalogClient::saved_product(&response, "products/add").is_none());

        let response = HttpResponse::new(
            200,
            std::collections::HashMap::new(),
            HttpResponse::parse_body("Saved"),
        );
        assert!(CatalogClient::saved_product(&response, "products/add").is_none());
    }
}
