//! API-side authorization guard.
//!
//! Every handler names an [`Action`]; the central policy table decides. A
//! denial is converted here into the uniform failure payload with the fixed
//! user-facing message, so no call site can leak internal detail.

use axum::response::Response;

use imprint_auth::{Action, authorize};

use crate::app::errors::denied;
use crate::context::{PrincipalContext, TenantContext};

/// Check authorization for an action in the current request context.
///
/// Call **before** touching any store. On denial the returned response is the
/// standard `{success:false, error}` body with the fixed message.
pub fn require(
    tenant: &TenantContext,
    principal: &PrincipalContext,
    action: Action,
) -> Result<(), Response> {
    let resolved = principal.principal(tenant);
    match authorize(&resolved, action) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::warn!(
                user_id = %resolved.user_id,
                tenant_id = %resolved.tenant_id,
                ?action,
                "authorization denied"
            );
            Err(denied(err))
        }
    }
}
