//! Machine Translation Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use vitrine_app::i18n::Language;

use crate::{extensions::*, state::State};

/// Machine Translation Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TranslateRequest {
    /// Source text
    pub text: String,

    /// Source language code (en or no)
    pub from: String,

    /// Target language code (en or no)
    pub to: String,
}

/// Machine Translation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TranslateResponse {
    /// The translated text, to populate the secondary form field
    pub translated: String,
}

/// Machine Translation Handler
///
/// An explicit admin assist: the result fills the secondary-language form
/// field, nothing is stored. Upstream failures leave fields untouched.
#[endpoint(
    tags("admin"),
    summary = "Machine Translate",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    json: JsonBody<TranslateRequest>,
    depot: &mut Depot,
) -> Result<Json<TranslateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let from = request
        .from
        .parse::<Language>()
        .or_400("could not parse \"from\" language")?;

    let to = request
        .to
        .parse::<Language>()
        .or_400("could not parse \"to\" language")?;

    let translated = state
        .app
        .translator
        .translate(&request.text, from, to)
        .await
        .map_err(|source| {
            error!("translation request failed: {source}");

            StatusError::bad_gateway().brief("Translation service unavailable")
        })?;

    Ok(Json(TranslateResponse { translated }))
}
