use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imprint_core::{AuthorId, impl_uuid_newtype};

/// Statement identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementId(Uuid);

impl_uuid_newtype!(StatementId, "StatementId");

/// A computed royalty liability owed to an author for a period.
///
/// The schema carries no paid/unpaid status: every statement on file is
/// treated as outstanding liability. Known model gap; do not infer a paid
/// flag from other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub id: StatementId,
    pub author_id: AuthorId,
    pub net_payable: Decimal,
    pub period_end: NaiveDate,
}
