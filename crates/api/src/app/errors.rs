//! Uniform response shaping.
//!
//! Every handler returns `{success:true, data}` or `{success:false, error}`.
//! Server-side detail is logged here and never forwarded to the client.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use imprint_auth::AuthzError;
use imprint_core::DomainError;

pub fn ok(data: serde_json::Value) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({ "success": true, "data": data })),
    )
        .into_response()
}

pub fn fail(status: StatusCode, error: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({ "success": false, "error": error.into() })),
    )
        .into_response()
}

/// Fixed-message denial payload for an authorization failure.
pub fn denied(err: AuthzError) -> axum::response::Response {
    fail(StatusCode::FORBIDDEN, err.to_string())
}

/// Map a domain error to the uniform failure payload.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match &err {
        DomainError::Validation(msg) => fail(StatusCode::BAD_REQUEST, msg.clone()),
        DomainError::InvalidId(msg) => fail(StatusCode::BAD_REQUEST, msg.clone()),
        DomainError::InvariantViolation(msg) => {
            fail(StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
        }
        DomainError::NotFound => fail(StatusCode::NOT_FOUND, "not found"),
        DomainError::Conflict(msg) => fail(StatusCode::CONFLICT, msg.clone()),
        DomainError::Unauthorized => fail(StatusCode::FORBIDDEN, "unauthorized"),
        DomainError::Downstream(msg) => {
            tracing::error!(error = %msg, "downstream collaborator failed");
            fail(StatusCode::BAD_GATEWAY, "upstream provider failed")
        }
    }
}
