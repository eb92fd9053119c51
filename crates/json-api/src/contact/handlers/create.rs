//! Contact Message Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::notify::{ContactMessage, dispatch};

use crate::{extensions::*, state::State};

/// Contact Message Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact Message Handler
///
/// Delivery is best-effort: the message is forwarded in the background and
/// a failure is logged, never surfaced.
#[endpoint(
    tags("storefront"),
    summary = "Send Contact Message",
    responses(
        (status_code = StatusCode::ACCEPTED, description = "Message queued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    if request.email.trim().is_empty() || request.message.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Email and message are required"));
    }

    let notifier = Arc::clone(&state.app.notifier);

    let message = ContactMessage {
        name: request.name,
        email: request.email,
        message: request.message,
    };

    dispatch(async move { notifier.contact_message(&message).await });

    res.status_code(StatusCode::ACCEPTED);

    Ok(())
}
