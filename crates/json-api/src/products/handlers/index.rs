//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::handlers::get::ProductResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The storefront product grid
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns the products this viewer may see, in the requested language.
#[endpoint(tags("storefront"), summary = "List Products")]
pub(crate) async fn handler(
    lang: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;
    let language = lang.into_language()?;

    let products = state
        .app
        .storefront
        .list_visible(viewer)
        .await
        .or_500("failed to fetch storefront products")?;

    Ok(Json(ProductsResponse {
        products: products
            .into_iter()
            .map(|product| ProductResponse::resolve(product, language))
            .collect(),
    }))
}
