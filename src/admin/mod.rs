//! Admin panel screens: route-driven tab selection and shared list state.
//!
//! - [`derive_active_tab`]: pure mapping from route parameters to a [`Tab`]
//! - [`AdminPanel`]: product and category lists plus product form wiring

mod panel;
mod route;

pub use panel::{AdminPanel, OpenFormError, ProductFormController};
pub use route::{derive_active_tab, RouteParams, Tab};
