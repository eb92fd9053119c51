//! Upload Handlers

pub(crate) mod document;
pub(crate) mod image;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use vitrine_app::storage::StorageError;

/// Upload Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadResponse {
    /// Public URL of the stored file
    pub url: String,
}

pub(crate) fn storage_into_status_error(error: StorageError) -> StatusError {
    error!("upload to object storage failed: {error}");

    StatusError::bad_gateway().brief("Storage service unavailable")
}
