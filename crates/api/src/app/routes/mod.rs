use axum::{Router, routing::get};

pub mod audit;
pub mod exports;
pub mod portal;
pub mod records;
pub mod reports;
pub mod system;

/// Router for all authenticated (tenant-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/reports", reports::router())
        .merge(exports::router())
        .nest("/records", records::router())
        .merge(audit::router())
        .nest("/portal", portal::router())
}
