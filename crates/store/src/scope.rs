//! Tenant-scope capability.

use imprint_core::TenantId;

/// Capability object proving a resolved tenant context.
///
/// All store methods take `&TenantScope` as their exclusive entry point; the
/// tenant predicate therefore cannot be forgotten at a call site. Construct a
/// scope only from an authenticated identity (the API middleware resolves one
/// from validated JWT claims) — never from request input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TenantScope {
    tenant_id: TenantId,
}

impl TenantScope {
    /// Resolve a scope from an already-authenticated tenant id.
    pub fn resolve(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_carries_the_resolved_tenant() {
        let tenant_id = TenantId::new();
        let scope = TenantScope::resolve(tenant_id);
        assert_eq!(scope.tenant_id(), tenant_id);
    }
}
