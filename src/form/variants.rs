//! Variant list edits.

use crate::clients::FileAttachment;
use crate::form::event::{FormError, InputEvent, VariantField, VariantFileField};
use crate::form::state::{FormState, ImageRef, VariantDraft};

impl FormState {
    /// Appends a default variant (empty labels, numeric fields `"0"`).
    #[must_use]
    pub fn add_variant(&self) -> Self {
        let mut next = self.clone();
        next.draft.variants.push(VariantDraft::default());
        next
    }

    /// Sets one scalar field on the variant at `index`.
    ///
    /// Only that variant changes; all others are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::VariantOutOfRange`] for an unknown index, or
    /// [`FormError::KindMismatch`] for a non-text event.
    pub fn update_variant(
        &self,
        index: usize,
        field: VariantField,
        event: InputEvent,
    ) -> Result<Self, FormError> {
        let value = match event {
            InputEvent::Text(value) => value,
            other => {
                return Err(FormError::KindMismatch {
                    field: format!("variants[{index}][{field}]"),
                    kind: other.kind(),
                })
            }
        };

        let mut next = self.clone();
        let variant = next.variant_mut(index)?;
        match field {
            VariantField::Size => variant.size = value,
            VariantField::Color => variant.color = value,
            VariantField::NewPrice => variant.new_price = value,
            VariantField::OldPrice => variant.old_price = value,
            VariantField::Quantity => variant.quantity = value,
        }
        Ok(next)
    }

    /// Stores picked files on the variant at `index`.
    ///
    /// The gallery takes every file, replacing earlier picks. The featured
    /// image takes the first file, or is cleared when `files` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::VariantOutOfRange`] for an unknown index.
    pub fn set_variant_file(
        &self,
        index: usize,
        field: VariantFileField,
        files: Vec<FileAttachment>,
    ) -> Result<Self, FormError> {
        let mut next = self.clone();
        let variant = next.variant_mut(index)?;
        match field {
            VariantFileField::FeaturedImage => {
                variant.featured_image = files.into_iter().next().map(ImageRef::Upload);
            }
            VariantFileField::Gallery => {
                variant.gallery = files.into_iter().map(ImageRef::Upload).collect();
            }
        }
        Ok(next)
    }

    fn variant_mut(&mut self, index: usize) -> Result<&mut VariantDraft, FormError> {
        let len = self.draft.variants.len();
        self.draft
            .variants
            .get_mut(index)
            .ok_or(FormError::VariantOutOfRange { index, len })
    }
}
