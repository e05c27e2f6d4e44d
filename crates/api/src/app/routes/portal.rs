use std::sync::Arc;

use axum::{Json, Router, extract::Extension, routing::post};
use chrono::Utc;

use imprint_audit::{AuditEntryId, AuditLogEntry};
use imprint_auth::Action;
use imprint_core::DomainError;
use imprint_parties::{PartyId, grant_portal_access};
use imprint_store::TenantStore;

use crate::app::dto::InviteRequest;
use crate::app::errors::{domain_error_to_response, ok};
use crate::app::services::AppServices;
use crate::authz::require;
use crate::context::{PrincipalContext, TenantContext};

pub fn router() -> Router {
    Router::new().route("/invitations", post(create_invitation))
}

pub async fn create_invitation(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<InviteRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::PortalInvite) {
        return denied;
    }

    let party_id: PartyId = match req.party_id.parse() {
        Ok(id) => id,
        Err(e) => return domain_error_to_response(e),
    };

    // The party must exist in this tenant before an invitation goes out.
    if services.parties.get(tenant.scope(), &party_id).is_none() {
        return domain_error_to_response(DomainError::not_found());
    }

    match grant_portal_access(
        tenant.scope(),
        &services.portal_users,
        services.invitations.as_ref(),
        party_id,
        req.role,
        Utc::now(),
    ) {
        Ok(user) => {
            services.audit.record(
                tenant.scope(),
                AuditLogEntry {
                    id: AuditEntryId::new(),
                    actor: principal.user_id(),
                    action_type: "portal_invite".to_string(),
                    resource_type: "portal_user".to_string(),
                    resource_id: user.id.to_string(),
                    before: None,
                    after: Some(serde_json::json!(user)),
                    recorded_at: Utc::now(),
                },
            );
            ok(serde_json::json!(user))
        }
        Err(e) => domain_error_to_response(e),
    }
}
