//! `imprint-api` — HTTP surface for the reporting core.

pub mod app;
pub mod authz;
pub mod context;
pub mod middleware;
