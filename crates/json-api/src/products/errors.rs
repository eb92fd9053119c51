//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::{catalog::CatalogError, products::ProductsServiceError};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::NotFound => StatusError::not_found(),
    }
}

pub(crate) fn catalog_into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::NotFound => StatusError::not_found(),
        CatalogError::Products(source) => into_status_error(source),
        CatalogError::Categories(source) => {
            error!("category lookup failed: {source}");

            StatusError::internal_server_error()
        }
        CatalogError::Assignments(source) => {
            error!("assignment lookup failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
