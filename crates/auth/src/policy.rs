//! Central action→roles policy table.
//!
//! Call sites never pass ad hoc role lists; they name an [`Action`] and the
//! table decides. Changing who may run a report is a one-line edit here.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Fixed user-facing denial message. Never replaced with internal detail.
pub const DENIAL_MESSAGE: &str = "You do not have permission to perform this action.";

/// Every permission-checked operation in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SalesReport,
    ArAging,
    RoyaltyLiability,
    IsbnStatus,
    AuditLogView,
    PortalInvite,
    ExportCsv,
    ManageRecords,
}

/// Roles permitted to perform an action.
pub fn permitted_roles(action: Action) -> &'static [Role] {
    use Role::*;

    match action {
        Action::SalesReport => &[Owner, Admin, Finance, Editor],
        Action::ArAging => &[Owner, Admin, Finance],
        Action::RoyaltyLiability => &[Owner, Admin, Finance],
        Action::IsbnStatus => &[Owner, Admin, Finance, Editor],
        Action::AuditLogView => &[Owner, Admin],
        Action::PortalInvite => &[Owner, Admin],
        Action::ExportCsv => &[Owner, Admin, Finance],
        Action::ManageRecords => &[Owner, Admin, Finance],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_is_never_permitted_a_report_action() {
        for action in [
            Action::SalesReport,
            Action::ArAging,
            Action::RoyaltyLiability,
            Action::IsbnStatus,
            Action::AuditLogView,
            Action::PortalInvite,
            Action::ExportCsv,
            Action::ManageRecords,
        ] {
            assert!(!permitted_roles(action).contains(&Role::Viewer));
        }
    }

    #[test]
    fn editor_may_read_sales_but_not_receivables() {
        assert!(permitted_roles(Action::SalesReport).contains(&Role::Editor));
        assert!(!permitted_roles(Action::ArAging).contains(&Role::Editor));
    }
}
