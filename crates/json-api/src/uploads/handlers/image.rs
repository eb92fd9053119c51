//! Product Image Upload Handler

use std::sync::Arc;

use salvo::prelude::*;

use vitrine_app::storage::{UploadKind, validate_image};

use crate::{
    extensions::*,
    state::State,
    uploads::handlers::{UploadResponse, storage_into_status_error},
};

/// Product Image Upload Handler
///
/// Validates size and MIME type before any bytes leave the process.
#[endpoint(
    tags("admin"),
    summary = "Upload Product Image",
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

    validate_image(&content_type, size)
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let bytes = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded file")?;

    let url = state
        .app
        .storage
        .upload(UploadKind::ProductImage, &file_name, &content_type, bytes)
        .await
        .map_err(storage_into_status_error)?;

    Ok(Json(UploadResponse { url }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ADMIN, TestApp, service_as};

    use super::*;

    #[tokio::test]
    async fn test_missing_file_field_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.storage.expect_upload().never();

        let res = TestClient::post("http://example.com/admin/uploads/images")
            .send(&service_as(
                app,
                TEST_ADMIN,
                Router::with_path("admin/uploads/images").post(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
