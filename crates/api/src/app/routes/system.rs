use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::context::{PrincipalContext, TenantContext};

pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

pub async fn whoami(
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "user_id": principal.user_id().to_string(),
            "tenant_id": tenant.scope().tenant_id().to_string(),
            "roles": principal.roles(),
        })),
    )
        .into_response()
}
