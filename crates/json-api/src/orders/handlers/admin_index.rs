//! Admin Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::QueryParam,
    prelude::*,
};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        handlers::{get::OrderResponse, index::OrdersResponse},
    },
    state::State,
};

/// Admin Order Index Handler
///
/// Returns every order in the system, newest first.
#[endpoint(
    tags("admin"),
    summary = "List Orders (admin)",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;
    let language = lang.into_language()?;

    let orders = state
        .app
        .orders
        .list_all_orders(viewer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders
            .into_iter()
            .map(|order| OrderResponse::resolve(order, language))
            .collect(),
    }))
}
