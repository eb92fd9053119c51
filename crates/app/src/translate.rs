//! Machine-translation assist client.
//!
//! An explicit admin action, never invoked automatically on save; a failed
//! call leaves the stored field untouched and surfaces as an upstream error.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;

/// Configuration for the translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Translation service base address.
    pub addr: String,
}

#[automock]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` between the two storefront languages.
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslateError>;
}

/// HTTP client for the translation endpoint.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    config: TranslatorConfig,
    http: Client,
}

impl HttpTranslator {
    #[must_use]
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    from: Language,
    to: Language,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated: String,
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.config.addr);

        let response = self
            .http
            .post(&url)
            .json(&TranslateRequest { text, from, to })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(TranslateError::UnexpectedResponse(format!(
                "translation failed with status {status}: {text}"
            )));
        }

        let parsed: TranslateResponse = response.json().await?;

        Ok(parsed.translated)
    }
}

/// Errors that can occur when requesting a translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx response or unexpected body.
    #[error("unexpected response from translation endpoint: {0}")]
    UnexpectedResponse(String),
}
