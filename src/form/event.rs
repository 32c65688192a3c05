//! Input events and field names for the product form.
//!
//! Front ends decode whatever their widget toolkit reports into an
//! [`InputEvent`] once, at the boundary. The form never inspects widget
//! state directly.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::clients::FileAttachment;

/// A change reported by one form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A text, number, textarea, or select input changed. Numeric inputs
    /// report their raw text; nothing is parsed until submission.
    Text(String),
    /// A checkbox was toggled.
    Checkbox(bool),
    /// A single-file picker changed. `None` when the selection was cleared.
    File(Option<FileAttachment>),
    /// A multi-file picker changed.
    FileList(Vec<FileAttachment>),
}

impl InputEvent {
    /// Returns the input kind name, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Checkbox(_) => "checkbox",
            Self::File(_) => "file",
            Self::FileList(_) => "file list",
        }
    }
}

impl From<&str> for InputEvent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InputEvent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for InputEvent {
    fn from(checked: bool) -> Self {
        Self::Checkbox(checked)
    }
}

/// Errors from misusing the form API.
///
/// These are programming errors in the front end (a checkbox wired to a text
/// field, an index the UI never rendered), not user input problems.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field with this name exists.
    #[error("Unknown form field '{name}'.")]
    UnknownField {
        /// The name that was looked up.
        name: String,
    },

    /// The input kind does not fit the field.
    #[error("Field '{field}' cannot take a {kind} input.")]
    KindMismatch {
        /// The field name.
        field: String,
        /// The input kind that was supplied.
        kind: &'static str,
    },

    /// The stock status select reported a value outside the known set.
    #[error("Invalid stock status '{value}'. Expected 'In Stock' or 'Out Of Stock'.")]
    InvalidStockStatus {
        /// The value that was supplied.
        value: String,
    },

    /// A variant index that does not exist.
    #[error("Variant index {index} is out of range for {len} variants.")]
    VariantOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of variants.
        len: usize,
    },
}

/// Scalar product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    /// User-supplied external identifier.
    Id,
    /// Display name.
    ItemName,
    /// Current price.
    NewPrice,
    /// Strikethrough price.
    OldPrice,
    /// Child category id.
    Category,
    /// Popular flag (checkbox).
    IsPopular,
    /// Short description.
    ShortDescription,
    /// Full description.
    FullDescription,
    /// Stock status select.
    StockStatus,
}

impl ProductField {
    /// Every field, in the order they are sent.
    pub const ALL: &'static [Self] = &[
        Self::Id,
        Self::ItemName,
        Self::NewPrice,
        Self::OldPrice,
        Self::Category,
        Self::IsPopular,
        Self::ShortDescription,
        Self::FullDescription,
        Self::StockStatus,
    ];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ItemName => "itemName",
            Self::NewPrice => "newPrice",
            Self::OldPrice => "oldPrice",
            Self::Category => "category",
            Self::IsPopular => "isPopular",
            Self::ShortDescription => "shortDescription",
            Self::FullDescription => "fullDescription",
            Self::StockStatus => "stockStatus",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Scalar variant fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantField {
    /// Size label.
    Size,
    /// Color label.
    Color,
    /// Current price.
    NewPrice,
    /// Strikethrough price.
    OldPrice,
    /// Units in stock.
    Quantity,
}

impl VariantField {
    /// Every field, in the order they are sent.
    pub const ALL: &'static [Self] = &[
        Self::Size,
        Self::Color,
        Self::NewPrice,
        Self::OldPrice,
        Self::Quantity,
    ];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Color => "color",
            Self::NewPrice => "newPrice",
            Self::OldPrice => "oldPrice",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for VariantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Variant file slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFileField {
    /// Single featured image.
    FeaturedImage,
    /// Image gallery.
    Gallery,
}

impl VariantFileField {
    /// Every slot, in the order they are sent.
    pub const ALL: &'static [Self] = &[Self::FeaturedImage, Self::Gallery];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FeaturedImage => "featuredImage",
            Self::Gallery => "gallery",
        }
    }
}

impl fmt::Display for VariantFileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantFileField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}
