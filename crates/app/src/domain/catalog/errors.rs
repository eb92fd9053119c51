//! Catalog errors.

use thiserror::Error;

use crate::domain::{
    assignments::AssignmentsServiceError, categories::CategoriesServiceError,
    products::ProductsServiceError,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Products(#[from] ProductsServiceError),

    #[error(transparent)]
    Categories(#[from] CategoriesServiceError),

    #[error(transparent)]
    Assignments(#[from] AssignmentsServiceError),
}
