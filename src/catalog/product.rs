//! Product resource types.
//!
//! These mirror the catalog API's JSON (camelCase field names, `_id` storage
//! identity). Prices are accepted as JSON numbers or numeric strings because
//! the API stores whatever the multipart form sent.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::StorageId;

/// Whether a product can currently be ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StockStatus {
    /// The product is available.
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    /// The product is not available.
    #[serde(rename = "Out Of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Every status, in selector order.
    pub const ALL: [Self; 2] = [Self::InStock, Self::OutOfStock];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out Of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A product's category as returned by the API.
///
/// Listing endpoints populate the category; single-product endpoints may
/// return only its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryRef {
    /// A bare category id.
    Id(String),
    /// A populated category.
    Populated {
        /// The category's storage id.
        #[serde(rename = "_id")]
        id: String,
        /// The category's display name.
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    /// Returns the referenced category id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Populated { id, .. } => id,
        }
    }

    /// Returns the category name when the reference was populated.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Populated { name, .. } => name.as_deref(),
        }
    }
}

/// A variant of a product (one size/color/stock combination).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Storage identity of the variant sub-document.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<StorageId>,

    /// Size label.
    #[serde(default)]
    pub size: String,

    /// Color label.
    #[serde(default)]
    pub color: String,

    /// Current price.
    #[serde(default, deserialize_with = "flexible::number")]
    pub new_price: Option<f64>,

    /// Strikethrough price.
    #[serde(default, deserialize_with = "flexible::number")]
    pub old_price: Option<f64>,

    /// Units in stock.
    #[serde(default, deserialize_with = "flexible::count")]
    pub quantity: Option<u64>,

    /// Stored filename of the variant's featured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Stored filenames of the variant's gallery images.
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// A catalog product.
///
/// # Example
///
/// ```rust
/// use storefront_admin::catalog::{Product, StockStatus};
///
/// let product: Product = serde_json::from_str(r#"{
///     "_id": "665f1c2ab3",
///     "id": "SKU-1",
///     "itemName": "Linen Shirt",
///     "newPrice": "39.5",
///     "category": {"_id": "c1", "name": "Shirts"},
///     "stockStatus": "Out Of Stock"
/// }"#).unwrap();
///
/// assert_eq!(product.new_price, Some(39.5));
/// assert_eq!(product.stock_status, StockStatus::OutOfStock);
/// assert_eq!(product.category.unwrap().id(), "c1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned storage identity.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<StorageId>,

    /// User-supplied external identifier.
    #[serde(default)]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub item_name: String,

    /// Current price.
    #[serde(default, deserialize_with = "flexible::number")]
    pub new_price: Option<f64>,

    /// Strikethrough price.
    #[serde(default, deserialize_with = "flexible::number")]
    pub old_price: Option<f64>,

    /// The child category this product belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,

    /// Whether the product is featured as popular.
    #[serde(default)]
    pub is_popular: bool,

    /// Tag labels.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Short description.
    #[serde(default)]
    pub short_description: String,

    /// Full description.
    #[serde(default)]
    pub full_description: String,

    /// Stock status.
    #[serde(default)]
    pub stock_status: StockStatus,

    /// Variants in display order.
    #[serde(default)]
    pub variants: Vec<Variant>,

    /// Stored filename of the featured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Stored filenames of the gallery images.
    #[serde(default)]
    pub gallery: Vec<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lenient numeric deserializers for fields the API may echo back as strings.
mod flexible {
    use super::{Deserialize, Deserializer};
    use serde::de::Error;
    use serde_json::Value;

    fn to_f64(value: Option<Value>) -> Result<Option<f64>, String> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("invalid number '{s}'")),
            Some(other) => Err(format!("expected a number, found {other}")),
        }
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        to_f64(value).map_err(D::Error::custom)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match to_f64(value).map_err(D::Error::custom)? {
            None => Ok(None),
            Some(n) if n >= 0.0 && n.fract() == 0.0 => Ok(Some(n as u64)),
            Some(n) => Err(D::Error::custom(format!(
                "expected a non-negative integer, found {n}"
            ))),
        }
    }
}
