use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imprint_core::{AuthorId, TitleId, impl_uuid_newtype};

/// Contract identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(Uuid);

impl_uuid_newtype!(ContractId, "ContractId");

/// Publishing contract linking an author to a title.
///
/// `advance_amount` and `advance_recouped` are both non-decreasing per
/// royalty run; recoupment itself is applied elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub author_id: AuthorId,
    pub title_id: TitleId,
    pub advance_amount: Decimal,
    pub advance_recouped: Decimal,
}

impl Contract {
    /// A contract has an active advance while recoupment has not caught up.
    pub fn has_active_advance(&self) -> bool {
        self.advance_amount > self.advance_recouped
    }

    pub fn remaining_advance(&self) -> Decimal {
        self.advance_amount - self.advance_recouped
    }
}
