//! Storefront catalog

pub mod errors;
pub mod service;
pub mod visibility;

pub use errors::CatalogError;
pub use service::*;
pub use visibility::{VisibilityFallback, visible_products, with_active_categories};
