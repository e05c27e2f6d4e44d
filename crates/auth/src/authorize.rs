use thiserror::Error;

use imprint_core::{TenantId, UserId};

use crate::policy::{Action, DENIAL_MESSAGE, permitted_roles};
use crate::roles::Role;

/// A fully resolved principal for authorization decisions.
///
/// Construction is decoupled from storage and transport: the API derives one
/// from validated JWT claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub tenant_id: TenantId,
    pub roles: Vec<Role>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// The principal holds none of the roles the policy table permits.
    /// Display renders the fixed user-facing message only.
    #[error("{}", DENIAL_MESSAGE)]
    Forbidden { action: Action },
}

/// Authorize a principal for an action against the central policy table.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: &Principal, action: Action) -> Result<(), AuthzError> {
    let permitted = permitted_roles(action);
    if principal.roles.iter().any(|r| permitted.contains(r)) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden { action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(roles: Vec<Role>) -> Principal {
        Principal {
            user_id: UserId::new(),
            tenant_id: TenantId::new(),
            roles,
        }
    }

    #[test]
    fn finance_may_run_ar_aging() {
        assert!(authorize(&principal(vec![Role::Finance]), Action::ArAging).is_ok());
    }

    #[test]
    fn viewer_is_denied_with_the_fixed_message() {
        let err = authorize(&principal(vec![Role::Viewer]), Action::ArAging).unwrap_err();
        assert_eq!(err.to_string(), DENIAL_MESSAGE);
    }

    #[test]
    fn roleless_principal_is_denied_everything() {
        let p = principal(vec![]);
        assert!(authorize(&p, Action::SalesReport).is_err());
        assert!(authorize(&p, Action::AuditLogView).is_err());
    }
}
