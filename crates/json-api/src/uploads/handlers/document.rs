//! Technical Document Upload Handler

use std::sync::Arc;

use salvo::prelude::*;

use vitrine_app::storage::{UploadKind, validate_document};

use crate::{
    extensions::*,
    state::State,
    uploads::handlers::{UploadResponse, storage_into_status_error},
};

/// Technical Document Upload Handler
///
/// Accepts pdf, doc, docx, and txt files up to 10 MiB.
#[endpoint(
    tags("admin"),
    summary = "Upload Technical Document",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UploadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(file) = req.file("file").await else {
        return Err(StatusError::bad_request().brief("Missing \"file\" form field"));
    };

    let file_name = file.name().unwrap_or("upload").to_string();

    let content_type = file
        .content_type()
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let size = usize::try_from(file.size()).or_400("file too large")?;

    validate_document(&file_name, size)
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let bytes = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded file")?;

    let url = state
        .app
        .storage
        .upload(
            UploadKind::TechnicalDocument,
            &file_name,
            &content_type,
            bytes,
        )
        .await
        .map_err(storage_into_status_error)?;

    Ok(Json(UploadResponse { url }))
}
