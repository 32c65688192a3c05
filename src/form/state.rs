//! Product form state and field-level edits.
//!
//! [`FormState`] is the single source of truth for one create/edit session.
//! Every edit takes `&self` and returns a new state; the previous state is
//! never modified, so a front end can keep it for undo or comparison.

use crate::catalog::{Category, Product, StockStatus};
use crate::clients::FileAttachment;
use crate::config::StorageId;
use crate::form::event::{FormError, InputEvent, ProductField};

/// Tags offered by the tag selector.
pub const TAG_OPTIONS: [&str; 4] = [
    "best seller white",
    "best seller black",
    "new white",
    "new black",
];

/// An image slot on a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// A filename already stored by the server (from a hydrated product).
    Stored(String),
    /// A file picked in this session, to be uploaded.
    Upload(FileAttachment),
}

/// Side effects a front end must perform after a form operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSignal {
    /// Clear the filenames displayed by file inputs.
    ClearFileInputs,
    /// Return to the product listing.
    NavigateToListing,
}

/// Whether a submission creates a new product or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionMode {
    /// `POST /products/add`.
    Create,
    /// `PUT /products/{storage_id}`.
    Update {
        /// The hydrated product's storage identity.
        storage_id: StorageId,
    },
}

/// An editable variant. Numeric fields hold raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDraft {
    /// Storage identity, present for variants loaded from the server.
    pub storage_id: Option<StorageId>,
    /// Size label.
    pub size: String,
    /// Color label.
    pub color: String,
    /// Current price (raw text).
    pub new_price: String,
    /// Strikethrough price (raw text).
    pub old_price: String,
    /// Units in stock (raw text).
    pub quantity: String,
    /// Featured image slot.
    pub featured_image: Option<ImageRef>,
    /// Gallery slots.
    pub gallery: Vec<ImageRef>,
}

impl Default for VariantDraft {
    fn default() -> Self {
        Self {
            storage_id: None,
            size: String::new(),
            color: String::new(),
            new_price: "0".to_string(),
            old_price: "0".to_string(),
            quantity: "0".to_string(),
            featured_image: None,
            gallery: Vec::new(),
        }
    }
}

/// The editable product record. Numeric fields hold raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Storage identity; `Some` only when hydrated from the server.
    pub storage_id: Option<StorageId>,
    /// User-supplied external identifier.
    pub id: String,
    /// Display name.
    pub item_name: String,
    /// Current price (raw text).
    pub new_price: String,
    /// Strikethrough price (raw text).
    pub old_price: String,
    /// Child category id.
    pub category: String,
    /// Popular flag.
    pub is_popular: bool,
    /// Tag labels. The selector holds at most one.
    pub tags: Vec<String>,
    /// Short description.
    pub short_description: String,
    /// Full description.
    pub full_description: String,
    /// Stock status.
    pub stock_status: StockStatus,
    /// Variants in display order.
    pub variants: Vec<VariantDraft>,
}

/// In-progress product plus UI-only state (picked files, drag state).
///
/// # Example
///
/// ```rust
/// use storefront_admin::form::{FormState, InputEvent, ProductField};
///
/// let state = FormState::new()
///     .set_field(ProductField::ItemName, InputEvent::from("Linen Shirt"))
///     .unwrap()
///     .set_field(ProductField::IsPopular, InputEvent::Checkbox(true))
///     .unwrap()
///     .set_tag("new white");
///
/// assert_eq!(state.draft().item_name, "Linen Shirt");
/// assert!(state.draft().is_popular);
/// assert_eq!(state.draft().tags, vec!["new white".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(crate) draft: ProductDraft,
    featured_image: Option<FileAttachment>,
    gallery: Vec<FileAttachment>,
    drag_active: bool,
}

impl FormState {
    /// Creates an empty form (create mode).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled from a fetched product (edit mode).
    ///
    /// Prices and quantities become their decimal text, the category becomes
    /// its id, and variant images become [`ImageRef::Stored`]. The product's
    /// own stored images are not carried over; only newly picked files are
    /// sent for the product itself.
    #[must_use]
    pub fn hydrate(product: Product) -> Self {
        let number = |value: Option<f64>| value.map_or_else(String::new, |n| n.to_string());

        let variants = product
            .variants
            .into_iter()
            .map(|variant| VariantDraft {
                storage_id: variant.storage_id,
                size: variant.size,
                color: variant.color,
                new_price: number(variant.new_price),
                old_price: number(variant.old_price),
                quantity: variant
                    .quantity
                    .map_or_else(String::new, |quantity| quantity.to_string()),
                featured_image: variant.featured_image.map(ImageRef::Stored),
                gallery: variant.gallery.into_iter().map(ImageRef::Stored).collect(),
            })
            .collect();

        Self {
            draft: ProductDraft {
                storage_id: product.storage_id,
                id: product.id,
                item_name: product.item_name,
                new_price: number(product.new_price),
                old_price: number(product.old_price),
                category: product
                    .category
                    .map_or_else(String::new, |category| category.id().to_string()),
                is_popular: product.is_popular,
                tags: product.tags,
                short_description: product.short_description,
                full_description: product.full_description,
                stock_status: product.stock_status,
                variants,
            },
            ..Self::default()
        }
    }

    /// Returns the editable product record.
    #[must_use]
    pub const fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Returns the variants in display order.
    #[must_use]
    pub fn variants(&self) -> &[VariantDraft] {
        &self.draft.variants
    }

    /// Returns the picked featured image, if any.
    #[must_use]
    pub const fn featured_image(&self) -> Option<&FileAttachment> {
        self.featured_image.as_ref()
    }

    /// Returns the gallery files in order.
    #[must_use]
    pub fn gallery(&self) -> &[FileAttachment] {
        &self.gallery
    }

    /// Returns `true` while files are being dragged over the gallery drop area.
    #[must_use]
    pub const fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Returns the submission mode: update iff a storage identity was hydrated.
    #[must_use]
    pub fn mode(&self) -> SubmissionMode {
        self.draft
            .storage_id
            .clone()
            .map_or(SubmissionMode::Create, |storage_id| SubmissionMode::Update {
                storage_id,
            })
    }

    /// Applies one scalar field edit.
    ///
    /// Checkbox events store their checked state; text events store the raw
    /// text. No numeric parsing happens here.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::KindMismatch`] if the event kind does not fit the
    /// field, or [`FormError::InvalidStockStatus`] for an unknown status.
    pub fn set_field(&self, field: ProductField, event: InputEvent) -> Result<Self, FormError> {
        let mut next = self.clone();
        let draft = &mut next.draft;

        match (field, event) {
            (ProductField::IsPopular, InputEvent::Checkbox(checked)) => draft.is_popular = checked,
            (ProductField::StockStatus, InputEvent::Text(value)) => {
                draft.stock_status = value
                    .parse()
                    .map_err(|value| FormError::InvalidStockStatus { value })?;
            }
            (ProductField::IsPopular, event)
            | (
                _,
                event @ (InputEvent::Checkbox(_) | InputEvent::File(_) | InputEvent::FileList(_)),
            ) => {
                return Err(FormError::KindMismatch {
                    field: field.to_string(),
                    kind: event.kind(),
                });
            }
            (ProductField::Id, InputEvent::Text(value)) => draft.id = value,
            (ProductField::ItemName, InputEvent::Text(value)) => draft.item_name = value,
            (ProductField::NewPrice, InputEvent::Text(value)) => draft.new_price = value,
            (ProductField::OldPrice, InputEvent::Text(value)) => draft.old_price = value,
            (ProductField::Category, InputEvent::Text(value)) => draft.category = value,
            (ProductField::ShortDescription, InputEvent::Text(value)) => {
                draft.short_description = value;
            }
            (ProductField::FullDescription, InputEvent::Text(value)) => {
                draft.full_description = value;
            }
        }

        Ok(next)
    }

    /// Replaces the tags with `[value]`, or with nothing when `value` is empty.
    ///
    /// This overwrites; it never appends. The list shape is kept for the API
    /// even though the selector only ever holds one tag.
    #[must_use]
    pub fn set_tag(&self, value: &str) -> Self {
        let mut next = self.clone();
        next.draft.tags = if value.is_empty() {
            Vec::new()
        } else {
            vec![value.to_string()]
        };
        next
    }

    /// Replaces the featured image selection.
    #[must_use]
    pub fn select_featured_image(&self, file: Option<FileAttachment>) -> Self {
        let mut next = self.clone();
        next.featured_image = file;
        next
    }

    /// Replaces the whole gallery with a picker selection.
    #[must_use]
    pub fn select_gallery(&self, files: Vec<FileAttachment>) -> Self {
        let mut next = self.clone();
        next.gallery = files;
        next
    }

    /// Marks the gallery drop area as active.
    #[must_use]
    pub fn drag_over(&self) -> Self {
        let mut next = self.clone();
        next.drag_active = true;
        next
    }

    /// Clears the drop area's active state.
    #[must_use]
    pub fn drag_leave(&self) -> Self {
        let mut next = self.clone();
        next.drag_active = false;
        next
    }

    /// Appends dropped files to the gallery and clears the drag state.
    ///
    /// Unlike [`select_gallery`](Self::select_gallery), drops accumulate.
    #[must_use]
    pub fn append_gallery_from_drop(&self, files: Vec<FileAttachment>) -> Self {
        let mut next = self.clone();
        next.drag_active = false;
        next.gallery.extend(files);
        next
    }

    /// Returns the initial empty state and asks the UI to clear its file inputs.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn reset(&self) -> (Self, UiSignal) {
        (Self::default(), UiSignal::ClearFileInputs)
    }
}

/// Returns `(value, label)` pairs for the category selector.
#[must_use]
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|category| (category.id.clone(), category.display_label()))
        .collect()
}
