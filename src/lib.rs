//! # Storefront Admin
//!
//! Admin-side client for a storefront catalog API: product form state,
//! multipart submission, and category lookups for an admin UI.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - Validated newtypes for the API address and record identities
//! - An async HTTP client with JSON and multipart request bodies
//! - Catalog resources ([`catalog::Product`], [`catalog::Category`]) and a
//!   [`catalog::CatalogClient`] with one method per endpoint
//! - Product form state with immutable field edits, a variant editor, and a
//!   deterministic multipart [`form::PayloadBuilder`]
//! - A [`form::SubmissionController`] that validates, dispatches create or
//!   update, and resets the form after a successful save
//! - Route-driven tab selection for the admin screens
//!
//! The crate does no rendering. A front end decodes widget changes into
//! [`form::InputEvent`]s and renders whatever [`form::FormState`] holds.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_admin::{AdminConfig, BaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:5000").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Editing a Product
//!
//! ```rust
//! use storefront_admin::form::{
//!     FormState, InputEvent, ProductField, VariantField, VariantFileField, FileAttachment,
//! };
//!
//! let form = FormState::new()
//!     .set_field(ProductField::ItemName, InputEvent::from("Linen Shirt"))
//!     .unwrap()
//!     .set_field(ProductField::NewPrice, InputEvent::from("49.00"))
//!     .unwrap()
//!     .set_tag("best seller white")
//!     .append_gallery_from_drop(vec![FileAttachment::new("front.jpg", vec![0xFF, 0xD8])])
//!     .add_variant()
//!     .update_variant(0, VariantField::Size, InputEvent::from("M"))
//!     .unwrap()
//!     .set_variant_file(0, VariantFileField::Gallery, Vec::new())
//!     .unwrap();
//!
//! assert_eq!(form.gallery().len(), 1);
//! assert_eq!(form.variants()[0].size, "M");
//! ```
//!
//! ## Submitting
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_admin::AdminConfig;
//! use storefront_admin::admin::{AdminPanel, RouteParams};
//!
//! let panel = Arc::new(AdminPanel::new(&AdminConfig::default())?);
//! panel.load().await;
//!
//! let (controller, mut form) = panel.open_product_form(&RouteParams::default()).await?;
//! // ... apply edits to `form` ...
//! match controller.submit(&mut form, &panel.child_categories()).await {
//!     Ok(report) => {
//!         // `form` is now empty; perform report.signals
//!     }
//!     Err(error) => eprintln!("{}", error.user_message()),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and installs no subscriber.
//!
//! ## Thread Safety
//!
//! [`AdminConfig`], [`catalog::CatalogClient`], [`admin::AdminPanel`], and
//! [`form::SubmissionController`] are `Send + Sync`.

pub mod admin;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod form;

// Re-export public types at crate root for convenience
pub use config::{AdminConfig, AdminConfigBuilder, BaseUrl, StorageId};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MultipartPayload, RequestBody,
};
