//! Object storage uploads for product images and technical documents.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client,
    header::AUTHORIZATION,
    multipart::{Form, Part},
};
use serde::Deserialize;
use thiserror::Error;

/// Upper size bound for product images.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Upper size bound for technical documents.
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Extensions accepted for technical documents.
const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// The two upload flavours, each with its own bucket and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProductImage,
    TechnicalDocument,
}

impl UploadKind {
    #[must_use]
    pub const fn bucket(self) -> &'static str {
        match self {
            Self::ProductImage => "product-images",
            Self::TechnicalDocument => "technical-documents",
        }
    }
}

/// Errors reported by upload validation; these map to 400s and are raised
/// before any bytes leave the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadValidationError {
    #[error("file exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("images must have an image/* content type")]
    NotAnImage,

    #[error("documents must be one of: pdf, doc, docx, txt")]
    UnsupportedDocumentType,
}

/// Validate a product-image upload: at most 5 MiB, `image/*` MIME type.
///
/// # Errors
///
/// Returns a validation error describing the first failed rule.
pub fn validate_image(content_type: &str, size: usize) -> Result<(), UploadValidationError> {
    if !content_type.starts_with("image/") {
        return Err(UploadValidationError::NotAnImage);
    }

    if size > MAX_IMAGE_BYTES {
        return Err(UploadValidationError::TooLarge {
            limit: MAX_IMAGE_BYTES,
        });
    }

    Ok(())
}

/// Validate a technical-document upload: at most 10 MiB, a known extension.
///
/// # Errors
///
/// Returns a validation error describing the first failed rule.
pub fn validate_document(file_name: &str, size: usize) -> Result<(), UploadValidationError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(UploadValidationError::UnsupportedDocumentType),
    }

    if size > MAX_DOCUMENT_BYTES {
        return Err(UploadValidationError::TooLarge {
            limit: MAX_DOCUMENT_BYTES,
        });
    }

    Ok(())
}

/// Configuration for the object storage service.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Storage service base address.
    pub addr: String,

    /// Service key used to authenticate uploads.
    pub service_key: String,
}

#[automock]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload a validated file and return its public URL.
    async fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}

/// HTTP client for the object storage service.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    config: ObjectStoreConfig,
    http: Client,
}

impl HttpObjectStore {
    #[must_use]
    pub fn new(config: ObjectStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let url = format!("{}/storage/v1/object/{}", self.config.addr, kind.bucket());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|_ignored| StorageError::InvalidContentType(content_type.to_string()))?;

        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.service_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StorageError::UnexpectedResponse(format!(
                "upload failed with status {status}: {text}"
            )));
        }

        let parsed: UploadResponse = response.json().await?;

        Ok(parsed.url)
    }
}

/// Errors that can occur when talking to the storage service.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The content type could not be used for a multipart part.
    #[error("invalid content type: {0}")]
    InvalidContentType(String),

    /// The service returned a non-2xx response or unexpected body.
    #[error("unexpected response from storage service: {0}")]
    UnexpectedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_within_limit_passes() {
        assert_eq!(validate_image("image/png", 1024), Ok(()));
        assert_eq!(validate_image("image/jpeg", MAX_IMAGE_BYTES), Ok(()));
    }

    #[test]
    fn oversized_image_is_rejected() {
        assert_eq!(
            validate_image("image/png", MAX_IMAGE_BYTES + 1),
            Err(UploadValidationError::TooLarge {
                limit: MAX_IMAGE_BYTES
            })
        );
    }

    #[test]
    fn non_image_content_type_is_rejected() {
        assert_eq!(
            validate_image("application/pdf", 10),
            Err(UploadValidationError::NotAnImage)
        );
    }

    #[test]
    fn known_document_extensions_pass() {
        for name in ["brochure.pdf", "manual.DOC", "sheet.docx", "notes.txt"] {
            assert_eq!(validate_document(name, 1024), Ok(()), "{name}");
        }
    }

    #[test]
    fn unknown_document_extension_is_rejected() {
        assert_eq!(
            validate_document("archive.zip", 10),
            Err(UploadValidationError::UnsupportedDocumentType)
        );

        assert_eq!(
            validate_document("no_extension", 10),
            Err(UploadValidationError::UnsupportedDocumentType)
        );
    }

    #[test]
    fn oversized_document_is_rejected() {
        assert_eq!(
            validate_document("datasheet.pdf", MAX_DOCUMENT_BYTES + 1),
            Err(UploadValidationError::TooLarge {
                limit: MAX_DOCUMENT_BYTES
            })
        );
    }
}
