//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use vitrine_app::auth::Viewer;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The viewer established by the auth middleware.
    fn viewer(&self) -> Result<Viewer, StatusError>;

    fn insert_viewer(&mut self, viewer: Viewer);
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn viewer(&self) -> Result<Viewer, StatusError> {
        self.obtain::<Viewer>()
            .copied()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_viewer(&mut self, viewer: Viewer) {
        self.inject(viewer);
    }
}
