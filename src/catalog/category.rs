//! Category resource types.
//!
//! The catalog is a three-level hierarchy: top categories, parent categories,
//! and child categories. Products reference child categories only.

use serde::{Deserialize, Serialize};

use crate::config::StorageId;

/// A reference from a child category to one of its parents.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ParentRef {
    /// The parent's storage id, when populated.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The parent's display name.
    #[serde(default)]
    pub name: String,
}

/// A parent or child category as listed by the API.
///
/// # Example
///
/// ```rust
/// use storefront_admin::catalog::Category;
///
/// let category: Category = serde_json::from_str(
///     r#"{"_id": "c1", "name": "Shirts", "parents": [{"name": "Men"}, {"name": "Sale"}]}"#,
/// ).unwrap();
///
/// assert_eq!(category.display_label(), "Shirts (Men, Sale)");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// Storage id; this is the value a product's `category` field refers to.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Parent categories (empty for parent categories themselves).
    #[serde(default)]
    pub parents: Vec<ParentRef>,
}

impl Category {
    /// Returns the selector label: the name followed by its parents' names
    /// in parentheses. The parentheses are kept, empty, for a category with
    /// no parents.
    #[must_use]
    pub fn display_label(&self) -> String {
        let parents: Vec<&str> = self.parents.iter().map(|p| p.name.as_str()).collect();
        format!("{} ({})", self.name, parents.join(", "))
    }
}

fn default_true() -> bool {
    true
}

/// A top-level navigation category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    /// Storage id; absent until the category has been created.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<StorageId>,

    /// Display name.
    pub name: String,

    /// Whether the category is live on the storefront.
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Whether the category appears in the storefront navbar.
    #[serde(default = "default_true")]
    pub show_in_navbar: bool,
}

impl TopCategory {
    /// Creates an unsaved, active, navbar-visible top category.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            storage_id: None,
            name: name.into(),
            is_active: true,
            show_in_navbar: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_label_without_parents() {
        let category = Category {
            id: "p1".to_string(),
            name: "Men".to_string(),
            parents: Vec::new(),
        };
        assert_eq!(category.display_label(), "Men ()");
    }

    #[test]
    fn test_top_category_defaults() {
        let category: TopCategory = serde_json::from_value(json!({"name": "Summer"})).unwrap();
        assert!(category.is_active);
        assert!(category.show_in_navbar);
        assert!(category.storage_id.is_none());
        assert_eq!(category, TopCategory::new("Summer"));
    }

    #[test]
    fn test_top_category_serializes_camel_case() {
        let mut category = TopCategory::new("Outlet");
        category.show_in_navbar = false;

        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(
            value,
            json!({"name": "Outlet", "isActive": true, "showInNavbar": false})
        );
    }
}
