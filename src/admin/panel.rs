//! Shared list state for the admin screens.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::admin::route::RouteParams;
use crate::catalog::{CatalogClient, Category, Product};
use crate::clients::HttpError;
use crate::config::{AdminConfig, StorageId};
use crate::error::ConfigError;
use crate::form::{FormState, SubmissionController};

/// The product form controller type an [`AdminPanel`] hands out.
pub type ProductFormController = SubmissionController<Arc<CatalogClient>>;

/// Errors from [`AdminPanel::open_product_form`].
#[derive(Debug, Error)]
pub enum OpenFormError {
    /// The route's product id is not a valid storage id.
    #[error("Invalid product id in route: {0}")]
    InvalidProductId(#[from] ConfigError),

    /// The product could not be fetched.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Product and category lists shared by every admin screen.
///
/// Lists start empty. [`load`](Self::load) fetches whichever are still
/// empty; the `refresh_*` methods always refetch. A failed fetch is logged
/// and the previous list is kept.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storefront_admin::AdminConfig;
/// use storefront_admin::admin::{AdminPanel, RouteParams};
///
/// let panel = Arc::new(AdminPanel::new(&AdminConfig::default())?);
/// panel.load().await;
///
/// let (controller, mut form) = panel.open_product_form(&RouteParams::default()).await?;
/// // ... edit form ...
/// controller.submit(&mut form, &panel.child_categories()).await?;
/// ```
#[derive(Debug)]
pub struct AdminPanel {
    client: Arc<CatalogClient>,
    products: RwLock<Vec<Product>>,
    parent_categories: RwLock<Vec<Category>>,
    child_categories: RwLock<Vec<Category>>,
}

// Verify AdminPanel is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminPanel>();
};

impl AdminPanel {
    /// Creates a panel with empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &AdminConfig) -> Result<Self, HttpError> {
        Ok(Self::with_client(Arc::new(CatalogClient::new(config)?)))
    }

    /// Creates a panel around an existing client.
    #[must_use]
    pub fn with_client(client: Arc<CatalogClient>) -> Self {
        Self {
            client,
            products: RwLock::new(Vec::new()),
            parent_categories: RwLock::new(Vec::new()),
            child_categories: RwLock::new(Vec::new()),
        }
    }

    /// Returns the catalog client.
    #[must_use]
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Returns a snapshot of the product list.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// Returns a snapshot of the parent category list.
    #[must_use]
    pub fn parent_categories(&self) -> Vec<Category> {
        self.parent_categories.read().clone()
    }

    /// Returns a snapshot of the child category list.
    #[must_use]
    pub fn child_categories(&self) -> Vec<Category> {
        self.child_categories.read().clone()
    }

    /// Fetches every list that is still empty.
    pub async fn load(&self) {
        let products_empty = self.products.read().is_empty();
        let parents_empty = self.parent_categories.read().is_empty();
        let children_empty = self.child_categories.read().is_empty();

        if products_empty {
            let _ = self.refresh_products().await;
        }
        if parents_empty {
            let _ = self.refresh_parent_categories().await;
        }
        if children_empty {
            let _ = self.refresh_child_categories().await;
        }
    }

    /// Refetches the product list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails; the previous list is kept.
    pub async fn refresh_products(&self) -> Result<usize, HttpError> {
        let result = self.client.list_products().await;
        Self::store(&self.products, result, "products")
    }

    /// Refetches the parent category list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails; the previous list is kept.
    pub async fn refresh_parent_categories(&self) -> Result<usize, HttpError> {
        let result = self.client.list_parent_categories().await;
        Self::store(&self.parent_categories, result, "parent categories")
    }

    /// Refetches the child category list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails; the previous list is kept.
    pub async fn refresh_child_categories(&self) -> Result<usize, HttpError> {
        let result = self.client.list_child_categories().await;
        Self::store(&self.child_categories, result, "child categories")
    }

    /// Deletes a product and refetches the product list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the delete fails. A failed refetch afterwards
    /// is only logged.
    pub async fn delete_product(&self, storage_id: &StorageId) -> Result<(), HttpError> {
        self.client.delete_product(storage_id).await?;
        let _ = self.refresh_products().await;
        Ok(())
    }

    /// Returns a submission controller whose refresh hook refetches this
    /// panel's product list.
    ///
    /// The refetch is awaited inside `submit`, so the list is current by the
    /// time a successful submit returns. A failed refetch is logged and the
    /// previous list is kept.
    #[must_use]
    pub fn product_form(self: &Arc<Self>) -> ProductFormController {
        let panel = Arc::clone(self);
        SubmissionController::new(Arc::clone(&self.client), move || {
            let panel = Arc::clone(&panel);
            async move {
                let _ = panel.refresh_products().await;
            }
        })
    }

    /// Opens the product form for a route: edit mode when the route names a
    /// product, create mode otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`OpenFormError::InvalidProductId`] if the route's product id
    /// is blank, or [`OpenFormError::Http`] if the product cannot be fetched.
    pub async fn open_product_form(
        self: &Arc<Self>,
        params: &RouteParams,
    ) -> Result<(ProductFormController, FormState), OpenFormError> {
        let controller = self.product_form();
        let form = match params.product_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => {
                let storage_id = StorageId::new(id)?;
                controller.load(&storage_id).await?
            }
            None => FormState::new(),
        };
        Ok((controller, form))
    }

    fn store<T>(
        list: &RwLock<Vec<T>>,
        result: Result<Vec<T>, HttpError>,
        what: &'static str,
    ) -> Result<usize, HttpError> {
        match result {
            Ok(items) => {
                let count = items.len();
                *list.write() = items;
                tracing::debug!(list = what, count, "Refreshed admin list");
                Ok(count)
            }
            Err(error) => {
                tracing::error!(list = what, error = %error, "Failed to fetch admin list");
                Err(error)
            }
        }
    }
}
