use imprint_auth::{Principal, Role};
use imprint_core::UserId;
use imprint_store::TenantScope;

/// Tenant context for a request.
///
/// Wraps the [`TenantScope`] capability resolved from validated claims; every
/// store read in a handler goes through this scope.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TenantContext {
    scope: TenantScope,
}

impl TenantContext {
    pub fn new(scope: TenantScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &TenantScope {
        &self.scope
    }
}

/// Principal context for a request (authenticated identity + roles).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    user_id: UserId,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(user_id: UserId, roles: Vec<Role>) -> Self {
        Self { user_id, roles }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Resolve a principal for authorization within the given tenant context.
    pub fn principal(&self, tenant: &TenantContext) -> Principal {
        Principal {
            user_id: self.user_id,
            tenant_id: tenant.scope().tenant_id(),
            roles: self.roles.clone(),
        }
    }
}
