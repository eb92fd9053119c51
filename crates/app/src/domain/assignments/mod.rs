//! Product visibility assignments

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::AssignmentsServiceError;
pub use models::without_admins;
pub use service::*;
