//! Best-effort email notifications.
//!
//! Notifications never gate the operation that triggered them: callers go
//! through [`dispatch`], which spawns the send and logs failures.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::{auth::UserUuid, domain::orders::models::OrderUuid};

/// Configuration for the notification endpoint.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Notification service base address.
    pub addr: String,
}

/// Payload for an order-confirmation email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    pub order_uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub total: Decimal,
    pub item_count: i64,
}

/// Payload for a contact-form message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an order-confirmation email.
    async fn order_confirmation(
        &self,
        confirmation: &OrderConfirmation,
    ) -> Result<(), NotifyError>;

    /// Forward a contact-form message.
    async fn contact_message(&self, message: &ContactMessage) -> Result<(), NotifyError>;
}

/// HTTP notifier against the email endpoint.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    config: NotifierConfig,
    http: Client,
}

impl HttpNotifier {
    #[must_use]
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<(), NotifyError> {
        let url = format!("{}{path}", self.config.addr);

        let response = self.http.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotifyError::UnexpectedResponse(format!(
                "notification failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn order_confirmation(
        &self,
        confirmation: &OrderConfirmation,
    ) -> Result<(), NotifyError> {
        self.post("/notifications/order", confirmation).await
    }

    async fn contact_message(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        self.post("/notifications/contact", message).await
    }
}

/// Fire-and-forget dispatch: run `send` in the background, logging failures.
pub fn dispatch<F>(send: F)
where
    F: Future<Output = Result<(), NotifyError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(error) = send.await {
            warn!("notification delivery failed: {error}");
        }
    });
}

/// Convenience for the common "notify via an `Arc<dyn Notifier>`" case.
pub fn dispatch_order_confirmation(notifier: Arc<dyn Notifier>, confirmation: OrderConfirmation) {
    dispatch(async move { notifier.order_confirmation(&confirmation).await });
}

/// Errors that can occur when delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx response.
    #[error("unexpected response from notification endpoint: {0}")]
    UnexpectedResponse(String),
}
