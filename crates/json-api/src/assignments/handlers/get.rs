//! Get Product Assignments Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{assignments::errors::into_status_error, extensions::*, state::State};

/// A single visibility edge.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AssignmentResponse {
    /// The assigned user
    pub user_uuid: Uuid,

    /// When the edge was created
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AssignmentsResponse {
    /// The product's current edge set; empty means publicly visible
    pub assignments: Vec<AssignmentResponse>,
}

/// Get Product Assignments Handler
///
/// Loads the current edge set for the admin editor's working set.
#[endpoint(
    tags("admin"),
    summary = "Get Product Assignments",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AssignmentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let viewer = depot.viewer()?;

    let assignments = state
        .app
        .assignments
        .assignments_for_product(viewer, product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(AssignmentsResponse {
        assignments: assignments
            .into_iter()
            .map(|edge| AssignmentResponse {
                user_uuid: edge.user_uuid.into(),
                created_at: edge.created_at.to_string(),
            })
            .collect(),
    }))
}
