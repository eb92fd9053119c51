//! Viewer resolution and admin gating.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use vitrine_app::auth::{AuthServiceError, Viewer};

use crate::{extensions::*, state::State};

/// Establish the request's viewer.
///
/// Storefront routes accept anonymous traffic, so a missing Authorization
/// header is not an error; a header that is present but invalid is.
#[salvo::handler]
pub(crate) async fn authenticate(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        depot.insert_viewer(Viewer::Anonymous);
        ctrl.call_next(req, depot, res).await;

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let viewer = match state.app.auth.authenticate_bearer(token).await {
        Ok(viewer) => viewer,
        Err(AuthServiceError::Unauthenticated) => {
            res.render(StatusError::unauthorized().brief("Invalid or expired session"));

            return;
        }
        Err(AuthServiceError::Provider(source)) => {
            error!("auth provider error during authentication: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_viewer(viewer);

    ctrl.call_next(req, depot, res).await;
}

/// Gate back-office routes: 401 for anonymous viewers, 403 for customers.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let viewer = match depot.viewer() {
        Ok(viewer) => viewer,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    if !viewer.is_authenticated() {
        res.render(StatusError::unauthorized().brief("Sign in required"));

        return;
    }

    if !viewer.is_admin() {
        res.render(StatusError::forbidden().brief("Admin role required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
