//! Cart Handlers

pub(crate) mod add_item;
pub(crate) mod clear;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod remove_item;
pub(crate) mod set_quantity;
