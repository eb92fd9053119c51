//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found(),
        OrdersServiceError::UnknownCart => StatusError::bad_request().brief("Unknown cart"),
        OrdersServiceError::EmptyCart => {
            StatusError::bad_request().brief("Cannot check out an empty cart")
        }
        OrdersServiceError::NotAuthenticated => {
            StatusError::unauthorized().brief("Sign in required")
        }
        OrdersServiceError::InvalidData | OrdersServiceError::InvalidStatus(_) => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
