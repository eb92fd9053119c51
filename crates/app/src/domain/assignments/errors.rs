//! Assignments service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignmentsServiceError {
    #[error("product not found")]
    UnknownProduct,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AssignmentsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::UnknownProduct,
            _ => Self::Sql(error),
        }
    }
}
