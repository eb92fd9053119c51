//! Assignment Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::assignments::AssignmentsServiceError;

pub(crate) fn into_status_error(error: AssignmentsServiceError) -> StatusError {
    match error {
        AssignmentsServiceError::UnknownProduct => {
            StatusError::not_found().brief("Product not found")
        }
        AssignmentsServiceError::Sql(source) => {
            error!("assignment storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
