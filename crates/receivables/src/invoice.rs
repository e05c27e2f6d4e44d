use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imprint_core::{ContactId, impl_uuid_newtype};

/// Invoice identifier (tenant-scoped via the store it lives in).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl_uuid_newtype!(InvoiceId, "InvoiceId");

/// Invoice status lifecycle. Terminal at `Paid` or `Void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    PartiallyPaid,
    Overdue,
    Paid,
    Void,
}

impl InvoiceStatus {
    /// Statuses that count toward accounts receivable.
    ///
    /// Draft invoices are not yet owed; paid/void are settled.
    pub fn is_receivable(&self) -> bool {
        matches!(
            self,
            InvoiceStatus::Sent | InvoiceStatus::PartiallyPaid | InvoiceStatus::Overdue
        )
    }
}

/// Invoice snapshot used by AR reporting.
///
/// Amounts are exact decimals; `balance_due` is what remains after payments
/// have been applied elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub contact_id: ContactId,
    pub total: Decimal,
    pub balance_due: Decimal,
    /// Invoices without a due date are treated as due today (never overdue).
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// True when this invoice belongs in an open-receivables snapshot.
    pub fn is_open(&self) -> bool {
        self.status.is_receivable() && self.balance_due > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn invoice(status: InvoiceStatus, balance_due: Decimal) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            contact_id: ContactId::new(),
            total: dec!(100),
            balance_due,
            due_date: None,
            status,
        }
    }

    #[test]
    fn receivable_statuses_are_open_while_balance_remains() {
        assert!(invoice(InvoiceStatus::Sent, dec!(100)).is_open());
        assert!(invoice(InvoiceStatus::PartiallyPaid, dec!(40)).is_open());
        assert!(invoice(InvoiceStatus::Overdue, dec!(0.01)).is_open());
    }

    #[test]
    fn settled_or_draft_invoices_are_not_open() {
        assert!(!invoice(InvoiceStatus::Draft, dec!(100)).is_open());
        assert!(!invoice(InvoiceStatus::Paid, dec!(0)).is_open());
        assert!(!invoice(InvoiceStatus::Void, dec!(100)).is_open());
        // Receivable status but nothing owed.
        assert!(!invoice(InvoiceStatus::Sent, dec!(0)).is_open());
    }
}
