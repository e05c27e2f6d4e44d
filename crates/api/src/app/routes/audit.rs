use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Query},
    routing::get,
};

use imprint_audit::AuditLogFilter;
use imprint_auth::Action;

use crate::app::dto::AuditLogQuery;
use crate::app::errors::ok;
use crate::app::services::AppServices;
use crate::authz::require;
use crate::context::{PrincipalContext, TenantContext};

pub fn router() -> Router {
    Router::new().route("/audit-log", get(list_audit_log))
}

pub async fn list_audit_log(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<AuditLogQuery>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::AuditLogView) {
        return denied;
    }

    let filter = AuditLogFilter {
        action_type: query.action_type,
        resource_type: query.resource_type,
        limit: query.limit,
    };
    let entries = services.audit.list(tenant.scope(), &filter);
    ok(serde_json::json!({ "entries": entries }))
}
