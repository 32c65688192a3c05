//! Catalog API resources.
//!
//! - [`Product`], [`Variant`], [`StockStatus`], [`CategoryRef`]: product records
//! - [`Category`], [`ParentRef`], [`TopCategory`]: the category hierarchy
//! - [`CatalogClient`]: one method per catalog endpoint
//! - [`ProductGateway`]: the async seam the form submission controller uses
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list products | GET | `/products` |
//! | fetch product | GET | `/products/{_id}` |
//! | create product | POST | `/products/add` (multipart) |
//! | update product | PUT | `/products/{_id}` (multipart) |
//! | delete product | DELETE | `/products/{_id}` |
//! | parent categories | GET | `/parentcategories` |
//! | child categories | GET | `/childcategories` |
//! | save top category | POST/PUT | `/api/v1/topcategories[/{_id}]` (JSON) |

mod category;
mod client;
mod gateway;
mod product;

pub use category::{Category, ParentRef, TopCategory};
pub use client::CatalogClient;
pub use gateway::ProductGateway;
pub use product::{CategoryRef, Product, StockStatus, Variant};
