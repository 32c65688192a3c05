//! Serialization of a [`FormState`] into a multipart body.

use crate::clients::MultipartPayload;
use crate::form::event::{ProductField, VariantField, VariantFileField};
use crate::form::state::{FormState, ImageRef, SubmissionMode, VariantDraft};

/// A built request body and the mode it should be sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    /// Create or update.
    pub mode: SubmissionMode,
    /// The multipart parts, in emission order.
    pub body: MultipartPayload,
}

impl SubmissionPayload {
    /// Returns the HTTP path this payload is sent to.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.mode {
            SubmissionMode::Create => "products/add".to_string(),
            SubmissionMode::Update { storage_id } => {
                format!("products/{}", storage_id.path_segment())
            }
        }
    }
}

/// Builds the multipart body for a product submission.
///
/// Building is pure: the same form and mode always produce the same parts in
/// the same order. Parts are emitted as:
///
/// 1. the scalar fields `id`, `itemName`, `newPrice`, `oldPrice`, `category`,
///    `isPopular`, `shortDescription`, `fullDescription`, `stockStatus`
/// 2. one `tags` part per tag
/// 3. `featuredImage`, if selected
/// 4. one `gallery` part per gallery file
/// 5. per variant `i`: `variants[i][_id]` (hydrated variants only), the
///    scalar fields as `variants[i][field]`, `variants[i][featuredImage]` if
///    present, then `variants[i][gallery][j]` per gallery image
///
/// # Example
///
/// ```rust
/// use storefront_admin::form::{FormState, InputEvent, PayloadBuilder, ProductField};
///
/// let state = FormState::new()
///     .set_field(ProductField::ItemName, InputEvent::from("Tee"))
///     .unwrap()
///     .set_tag("new black");
///
/// let payload = PayloadBuilder::new(&state).build();
/// assert_eq!(payload.body.text("itemName"), Some("Tee"));
/// assert_eq!(payload.body.text("tags"), Some("new black"));
/// assert_eq!(payload.path(), "products/add");
/// ```
#[derive(Debug)]
pub struct PayloadBuilder<'a> {
    state: &'a FormState,
    mode: SubmissionMode,
}

impl<'a> PayloadBuilder<'a> {
    /// Creates a builder using the form's own mode.
    #[must_use]
    pub fn new(state: &'a FormState) -> Self {
        Self {
            state,
            mode: state.mode(),
        }
    }

    /// Overrides the submission mode.
    #[must_use]
    pub fn mode(mut self, mode: SubmissionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the payload.
    #[must_use]
    pub fn build(self) -> SubmissionPayload {
        let draft = self.state.draft();
        let mut body = MultipartPayload::new();

        for field in ProductField::ALL {
            let value = match field {
                ProductField::Id => draft.id.clone(),
                ProductField::ItemName => draft.item_name.clone(),
                ProductField::NewPrice => draft.new_price.clone(),
                ProductField::OldPrice => draft.old_price.clone(),
                ProductField::Category => draft.category.clone(),
                ProductField::IsPopular => draft.is_popular.to_string(),
                ProductField::ShortDescription => draft.short_description.clone(),
                ProductField::FullDescription => draft.full_description.clone(),
                ProductField::StockStatus => draft.stock_status.to_string(),
            };
            body.push_text(field.as_str(), value);
        }

        for tag in &draft.tags {
            body.push_text("tags", tag.as_str());
        }

        if let Some(file) = self.state.featured_image() {
            body.push_file("featuredImage", file.clone());
        }

        for file in self.state.gallery() {
            body.push_file("gallery", file.clone());
        }

        for (index, variant) in draft.variants.iter().enumerate() {
            push_variant(&mut body, index, variant);
        }

        SubmissionPayload {
            mode: self.mode,
            body,
        }
    }
}

fn push_variant(body: &mut MultipartPayload, index: usize, variant: &VariantDraft) {
    let prefix = format!("variants[{index}]");

    if let Some(storage_id) = &variant.storage_id {
        body.push_text(format!("{prefix}[_id]"), storage_id.to_string());
    }

    for field in VariantField::ALL {
        let value = match field {
            VariantField::Size => &variant.size,
            VariantField::Color => &variant.color,
            VariantField::NewPrice => &variant.new_price,
            VariantField::OldPrice => &variant.old_price,
            VariantField::Quantity => &variant.quantity,
        };
        body.push_text(format!("{prefix}[{field}]"), value.as_str());
    }

    if let Some(image) = &variant.featured_image {
        push_image(
            body,
            format!("{prefix}[{}]", VariantFileField::FeaturedImage),
            image,
        );
    }

    for (position, image) in variant.gallery.iter().enumerate() {
        push_image(
            body,
            format!("{prefix}[{}][{position}]", VariantFileField::Gallery),
            image,
        );
    }
}

fn push_image(body: &mut MultipartPayload, name: String, image: &ImageRef) {
    match image {
        ImageRef::Stored(file_name) => body.push_text(name, file_name.as_str()),
        ImageRef::Upload(file) => body.push_file(name, file.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, Variant};
    use crate::clients::FileAttachment;
    use crate::config::StorageId;
    use crate::form::event::InputEvent;

    fn file(name: &str) -> FileAttachment {
        FileAttachment::new(name, name.as_bytes().to_vec())
    }

    fn filled() -> FormState {
        FormState::new()
            .set_field(ProductField::Id, InputEvent::from("SKU-1"))
            .unwrap()
            .set_field(ProductField::ItemName, InputEvent::from("Tee"))
            .unwrap()
            .set_field(ProductField::NewPrice, InputEvent::from("19.99"))
            .unwrap()
            .set_field(ProductField::IsPopular, InputEvent::Checkbox(true))
            .unwrap()
            .set_tag("new white")
            .select_featured_image(Some(file("hero.png")))
            .select_gallery(vec![file("g1.png"), file("g2.png")])
            .add_variant()
            .update_variant(0, VariantField::Quantity, InputEvent::from("5"))
            .unwrap()
            .set_variant_file(
                0,
                VariantFileField::Gallery,
                vec![file("v0a.png"), file("v0b.png")],
            )
            .unwrap()
    }

    #[test]
    fn test_part_order() {
        let payload = PayloadBuilder::new(&filled()).build();
        assert_eq!(
            payload.body.names(),
            vec![
                "id",
                "itemName",
                "newPrice",
                "oldPrice",
                "category",
                "isPopular",
                "shortDescription",
                "fullDescription",
                "stockStatus",
                "tags",
                "featuredImage",
                "gallery",
                "gallery",
                "variants[0][size]",
                "variants[0][color]",
                "variants[0][newPrice]",
                "variants[0][oldPrice]",
                "variants[0][quantity]",
                "variants[0][gallery][0]",
                "variants[0][gallery][1]",
            ]
        );
    }

    #[test]
    fn test_scalar_values() {
        let payload = PayloadBuilder::new(&filled()).build();
        let body = &payload.body;
        assert_eq!(body.text("isPopular"), Some("true"));
        assert_eq!(body.text("stockStatus"), Some("In Stock"));
        assert_eq!(body.text("oldPrice"), Some(""));
        assert_eq!(body.text("variants[0][quantity]"), Some("5"));
        assert_eq!(body.text("variants[0][newPrice]"), Some("0"));
        assert_eq!(body.file_count(), 5);
    }

    #[test]
    fn test_build_is_deterministic() {
        let state = filled();
        assert_eq!(
            PayloadBuilder::new(&state).build(),
            PayloadBuilder::new(&state).build()
        );
    }

    #[test]
    fn test_empty_form_has_only_scalar_parts() {
        let payload = PayloadBuilder::new(&FormState::new()).build();
        assert_eq!(payload.body.len(), ProductField::ALL.len());
        assert_eq!(payload.body.text("isPopular"), Some("false"));
        assert_eq!(payload.mode, SubmissionMode::Create);
    }

    #[test]
    fn test_hydrated_variant_parts() {
        let product = Product {
            storage_id: Some(StorageId::new("p9").unwrap()),
            variants: vec![Variant {
                storage_id: Some(StorageId::new("v9").unwrap()),
                featured_image: Some("v9.png".to_string()),
                gallery: vec!["v9-a.png".to_string()],
                ..Default::default()
            }],
            featured_image: Some("stored-hero.png".to_string()),
            ..Default::default()
        };
        let state = FormState::hydrate(product)
            .set_variant_file(0, VariantFileField::Gallery, vec![file("new.png")])
            .unwrap();

        let payload = PayloadBuilder::new(&state).build();
        let names = payload.body.names();
        let variant_names: Vec<_> = names
            .iter()
            .filter(|name| name.starts_with("variants[0]"))
            .copied()
            .collect();

        assert_eq!(variant_names.first(), Some(&"variants[0][_id]"));
        assert_eq!(payload.body.text("variants[0][_id]"), Some("v9"));
        assert_eq!(
            payload.body.text("variants[0][featuredImage]"),
            Some("v9.png")
        );
        assert!(payload
            .body
            .all("variants[0][gallery][0]")
            .all(|part| part.as_file().is_some()));
        assert!(!names.contains(&"featuredImage"));
        assert_eq!(payload.path(), "products/p9");
    }

    #[test]
    fn test_mode_override() {
        let storage_id = StorageId::new("abc").unwrap();
        let payload = PayloadBuilder::new(&FormState::new())
            .mode(SubmissionMode::Update {
                storage_id: storage_id.clone(),
            })
            .build();
        assert_eq!(payload.mode, SubmissionMode::Update { storage_id });
    }
}
