//! Route parameters and active-tab selection.

use std::fmt;
use std::str::FromStr;

/// Identifiers captured from the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// The product being edited, if any.
    pub product_id: Option<String>,
    /// The category being edited, if any. Parent category ids start with `p`.
    pub category_id: Option<String>,
}

impl RouteParams {
    /// Route parameters for editing a product.
    #[must_use]
    pub fn product(id: impl Into<String>) -> Self {
        Self {
            product_id: Some(id.into()),
            category_id: None,
        }
    }

    /// Route parameters for editing a category.
    #[must_use]
    pub fn category(id: impl Into<String>) -> Self {
        Self {
            product_id: None,
            category_id: Some(id.into()),
        }
    }
}

/// A screen of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Create a product.
    AddProduct,
    /// Edit the product named by the route.
    EditProduct,
    /// Product listing.
    #[default]
    ViewProducts,
    /// Create a parent category.
    AddParentCategory,
    /// Edit the parent category named by the route.
    EditParentCategory,
    /// Parent category listing.
    ViewParentCategories,
    /// Create a child category.
    AddChildCategory,
    /// Edit the child category named by the route.
    EditChildCategory,
    /// Child category listing.
    ViewChildCategories,
}

impl Tab {
    /// Every tab.
    pub const ALL: [Self; 9] = [
        Self::AddProduct,
        Self::EditProduct,
        Self::ViewProducts,
        Self::AddParentCategory,
        Self::EditParentCategory,
        Self::ViewParentCategories,
        Self::AddChildCategory,
        Self::EditChildCategory,
        Self::ViewChildCategories,
    ];

    /// Returns the route name of this tab.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AddProduct => "addProduct",
            Self::EditProduct => "editProduct",
            Self::ViewProducts => "viewProducts",
            Self::AddParentCategory => "addParentCategory",
            Self::EditParentCategory => "editParentCategory",
            Self::ViewParentCategories => "viewParentCategories",
            Self::AddChildCategory => "addChildCategory",
            Self::EditChildCategory => "editChildCategory",
            Self::ViewChildCategories => "viewChildCategories",
        }
    }

    /// Returns the page heading.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::AddProduct => "Add Product",
            Self::EditProduct => "Edit Product",
            Self::ViewProducts => "Products",
            Self::AddParentCategory => "Add Parent Category",
            Self::EditParentCategory => "Edit Parent Category",
            Self::ViewParentCategories => "Parent Categories",
            Self::AddChildCategory => "Add Child Category",
            Self::EditChildCategory => "Edit Child Category",
            Self::ViewChildCategories => "Child Categories",
        }
    }

    /// Returns the submit button label, or `None` for listing tabs.
    #[must_use]
    pub const fn submit_label(&self) -> Option<&'static str> {
        match self {
            Self::AddProduct => Some("Add Product"),
            Self::EditProduct => Some("Update Product"),
            Self::AddParentCategory | Self::AddChildCategory => Some("Add Category"),
            Self::EditParentCategory | Self::EditChildCategory => Some("Update Category"),
            Self::ViewProducts | Self::ViewParentCategories | Self::ViewChildCategories => None,
        }
    }

    /// Returns `true` for the two product form tabs.
    #[must_use]
    pub const fn is_product_form(&self) -> bool {
        matches!(self, Self::AddProduct | Self::EditProduct)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("Unknown tab '{s}'"))
    }
}

/// Picks the tab to show for a route.
///
/// A product id selects [`Tab::EditProduct`]. Otherwise a category id
/// selects [`Tab::EditParentCategory`] when it starts with `p` and
/// [`Tab::EditChildCategory`] otherwise. With neither, `default` is used.
///
/// Call this on every render; there is no stored copy to keep in sync.
///
/// # Example
///
/// ```rust
/// use storefront_admin::admin::{derive_active_tab, RouteParams, Tab};
///
/// assert_eq!(
///     derive_active_tab(Tab::ViewProducts, &RouteParams::product("665f")),
///     Tab::EditProduct
/// );
/// assert_eq!(
///     derive_active_tab(Tab::AddProduct, &RouteParams::default()),
///     Tab::AddProduct
/// );
/// ```
#[must_use]
pub fn derive_active_tab(default: Tab, params: &RouteParams) -> Tab {
    if present(params.product_id.as_deref()).is_some() {
        return Tab::EditProduct;
    }
    match present(params.category_id.as_deref()) {
        Some(id) if id.starts_with('p') => Tab::EditParentCategory,
        Some(_) => Tab::EditChildCategory,
        None => default,
    }
}

fn present(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_wins() {
        let params = RouteParams {
            product_id: Some("665f".to_string()),
            category_id: Some("p1".to_string()),
        };
        assert_eq!(derive_active_tab(Tab::ViewProducts, &params), Tab::EditProduct);
    }

    #[test]
    fn test_category_prefix_selects_parent_or_child() {
        assert_eq!(
            derive_active_tab(Tab::ViewProducts, &RouteParams::category("p42")),
            Tab::EditParentCategory
        );
        assert_eq!(
            derive_active_tab(Tab::ViewProducts, &RouteParams::category("c42")),
            Tab::EditChildCategory
        );
    }

    #[test]
    fn test_default_tab_without_params() {
        for tab in Tab::ALL {
            assert_eq!(derive_active_tab(tab, &RouteParams::default()), tab);
        }
        assert_eq!(
            derive_active_tab(Tab::AddChildCategory, &RouteParams::category("")),
            Tab::AddChildCategory
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tab::AddProduct.heading(), "Add Product");
        assert_eq!(Tab::EditProduct.heading(), "Edit Product");
        assert_eq!(Tab::EditProduct.submit_label(), Some("Update Product"));
        assert_eq!(Tab::AddProduct.submit_label(), Some("Add Product"));
        assert_eq!(Tab::ViewProducts.submit_label(), None);
    }

    #[test]
    fn test_tab_names_parse() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>(), Ok(tab));
        }
        assert!("dashboard".parse::<Tab>().is_err());
    }
}
