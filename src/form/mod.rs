//! Product form state and submission.
//!
//! - [`FormState`]: the in-progress product plus picked files and drag state
//! - [`InputEvent`]: one decoded input change, applied with
//!   [`FormState::set_field`] or [`FormState::update_variant`]
//! - [`PayloadBuilder`]: deterministic multipart serialization
//! - [`SubmissionController`]: create/update dispatch with a busy guard
//!
//! Every edit returns a new [`FormState`]; nothing is mutated in place
//! except by [`SubmissionController::submit`], which resets the form after a
//! successful save.
//!
//! # Example
//!
//! ```rust
//! use storefront_admin::form::{
//!     FormState, InputEvent, PayloadBuilder, VariantField,
//! };
//!
//! let form = FormState::new()
//!     .add_variant()
//!     .update_variant(0, VariantField::Quantity, InputEvent::from("5"))
//!     .unwrap();
//!
//! assert_eq!(form.variants()[0].quantity, "5");
//! assert_eq!(form.variants()[0].new_price, "0");
//!
//! let payload = PayloadBuilder::new(&form).build();
//! assert_eq!(payload.body.text("variants[0][quantity]"), Some("5"));
//! ```

mod event;
mod payload;
mod state;
mod submission;
mod validation;
mod variants;

pub use crate::clients::FileAttachment;
pub use event::{FormError, InputEvent, ProductField, VariantField, VariantFileField};
pub use payload::{PayloadBuilder, SubmissionPayload};
pub use state::{
    category_options, FormState, ImageRef, ProductDraft, SubmissionMode, UiSignal, VariantDraft,
    TAG_OPTIONS,
};
pub use submission::{
    SubmissionController, SubmissionError, SubmissionState, SubmitReport, REJECTED_FALLBACK,
    TRANSPORT_FALLBACK,
};
pub use validation::{FieldViolation, ValidationError, ViolationReason};
