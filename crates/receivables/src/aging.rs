//! AR aging bucket classifier.
//!
//! Partitions open invoices into five mutually exclusive day-range buckets
//! relative to the due date, accumulating exact decimal sums per customer and
//! tenant-wide. A pure transform over a queried snapshot; no IO.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use imprint_core::ContactId;

use crate::invoice::Invoice;

/// Fixed day-range classification for overdue receivables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    Current,
    Days1To30,
    Days31To60,
    Days61To90,
    Over90,
}

impl AgingBucket {
    /// Classify a whole-day overdue count into exactly one bucket.
    pub fn classify(days_overdue: i64) -> Self {
        match days_overdue {
            d if d <= 0 => AgingBucket::Current,
            d if d <= 30 => AgingBucket::Days1To30,
            d if d <= 60 => AgingBucket::Days31To60,
            d if d <= 90 => AgingBucket::Days61To90,
            _ => AgingBucket::Over90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgingBucket::Current => "current",
            AgingBucket::Days1To30 => "1-30",
            AgingBucket::Days31To60 => "31-60",
            AgingBucket::Days61To90 => "61-90",
            AgingBucket::Over90 => "90+",
        }
    }
}

/// Per-customer aging row. The five buckets always sum to `total` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAging {
    pub contact_id: ContactId,
    pub current: Decimal,
    pub days_1_30: Decimal,
    pub days_31_60: Decimal,
    pub days_61_90: Decimal,
    pub over_90: Decimal,
    pub total: Decimal,
}

impl CustomerAging {
    fn new(contact_id: ContactId) -> Self {
        Self {
            contact_id,
            current: Decimal::ZERO,
            days_1_30: Decimal::ZERO,
            days_31_60: Decimal::ZERO,
            days_61_90: Decimal::ZERO,
            over_90: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    fn add(&mut self, bucket: AgingBucket, amount: Decimal) {
        match bucket {
            AgingBucket::Current => self.current += amount,
            AgingBucket::Days1To30 => self.days_1_30 += amount,
            AgingBucket::Days31To60 => self.days_31_60 += amount,
            AgingBucket::Days61To90 => self.days_61_90 += amount,
            AgingBucket::Over90 => self.over_90 += amount,
        }
        self.total += amount;
    }

    pub fn bucket(&self, bucket: AgingBucket) -> Decimal {
        match bucket {
            AgingBucket::Current => self.current,
            AgingBucket::Days1To30 => self.days_1_30,
            AgingBucket::Days31To60 => self.days_31_60,
            AgingBucket::Days61To90 => self.days_61_90,
            AgingBucket::Over90 => self.over_90,
        }
    }
}

/// Tenant-wide aging totals (one amount per bucket plus the grand total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingTotals {
    pub current: Decimal,
    pub days_1_30: Decimal,
    pub days_31_60: Decimal,
    pub days_61_90: Decimal,
    pub over_90: Decimal,
    pub grand_total: Decimal,
}

impl AgingTotals {
    fn zero() -> Self {
        Self {
            current: Decimal::ZERO,
            days_1_30: Decimal::ZERO,
            days_31_60: Decimal::ZERO,
            days_61_90: Decimal::ZERO,
            over_90: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }

    fn add(&mut self, bucket: AgingBucket, amount: Decimal) {
        match bucket {
            AgingBucket::Current => self.current += amount,
            AgingBucket::Days1To30 => self.days_1_30 += amount,
            AgingBucket::Days31To60 => self.days_31_60 += amount,
            AgingBucket::Days61To90 => self.days_61_90 += amount,
            AgingBucket::Over90 => self.over_90 += amount,
        }
        self.grand_total += amount;
    }
}

/// AR aging report: per-customer rows (sorted by total descending) + totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingReport {
    pub rows: Vec<CustomerAging>,
    pub totals: AgingTotals,
}

/// Classify a snapshot of invoices into aging buckets per customer.
///
/// Only open invoices (receivable status, positive balance) participate.
/// Invoices without a due date are treated as due today, so they land in
/// `Current`. Zero matching invoices yields an empty report, not an error.
pub fn age_receivables(invoices: &[Invoice], today: NaiveDate) -> AgingReport {
    let mut by_customer: HashMap<ContactId, CustomerAging> = HashMap::new();
    let mut totals = AgingTotals::zero();

    for invoice in invoices.iter().filter(|i| i.is_open()) {
        let due = invoice.due_date.unwrap_or(today);
        let days_overdue = (today - due).num_days();
        let bucket = AgingBucket::classify(days_overdue);

        by_customer
            .entry(invoice.contact_id)
            .or_insert_with(|| CustomerAging::new(invoice.contact_id))
            .add(bucket, invoice.balance_due);
        totals.add(bucket, invoice.balance_due);
    }

    let mut rows: Vec<CustomerAging> = by_customer.into_values().collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    AgingReport { rows, totals }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use imprint_core::ContactId;

    use super::*;
    use crate::invoice::{InvoiceId, InvoiceStatus};

    fn open_invoice(contact_id: ContactId, balance: Decimal, due: Option<NaiveDate>) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            contact_id,
            total: balance,
            balance_due: balance,
            due_date: due,
            status: InvoiceStatus::Sent,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn boundaries_classify_into_exactly_the_expected_bucket() {
        assert_eq!(AgingBucket::classify(-5), AgingBucket::Current);
        assert_eq!(AgingBucket::classify(0), AgingBucket::Current);
        assert_eq!(AgingBucket::classify(1), AgingBucket::Days1To30);
        assert_eq!(AgingBucket::classify(30), AgingBucket::Days1To30);
        assert_eq!(AgingBucket::classify(31), AgingBucket::Days31To60);
        assert_eq!(AgingBucket::classify(60), AgingBucket::Days31To60);
        assert_eq!(AgingBucket::classify(61), AgingBucket::Days61To90);
        assert_eq!(AgingBucket::classify(90), AgingBucket::Days61To90);
        assert_eq!(AgingBucket::classify(91), AgingBucket::Over90);
    }

    #[test]
    fn worked_example_10_40_70_100_days_overdue() {
        let contact = ContactId::new();
        let invoices: Vec<Invoice> = [(10, dec!(100)), (40, dec!(200)), (70, dec!(300)), (100, dec!(400))]
            .into_iter()
            .map(|(days, balance)| {
                open_invoice(contact, balance, Some(today() - Duration::days(days)))
            })
            .collect();

        let report = age_receivables(&invoices, today());
        assert_eq!(report.rows.len(), 1);

        let row = &report.rows[0];
        assert_eq!(row.current, dec!(0));
        assert_eq!(row.days_1_30, dec!(100));
        assert_eq!(row.days_31_60, dec!(200));
        assert_eq!(row.days_61_90, dec!(300));
        assert_eq!(row.over_90, dec!(400));
        assert_eq!(row.total, dec!(1000));
        assert_eq!(report.totals.grand_total, dec!(1000));
    }

    #[test]
    fn missing_due_date_defaults_to_current() {
        let invoices = vec![open_invoice(ContactId::new(), dec!(50), None)];
        let report = age_receivables(&invoices, today());
        assert_eq!(report.rows[0].current, dec!(50));
        assert_eq!(report.rows[0].over_90, dec!(0));
    }

    #[test]
    fn empty_snapshot_yields_empty_report() {
        let report = age_receivables(&[], today());
        assert!(report.rows.is_empty());
        assert_eq!(report.totals.grand_total, dec!(0));
    }

    #[test]
    fn settled_invoices_are_excluded() {
        let contact = ContactId::new();
        let mut paid = open_invoice(contact, dec!(75), Some(today()));
        paid.status = InvoiceStatus::Paid;
        paid.balance_due = Decimal::ZERO;

        let report = age_receivables(&[paid], today());
        assert!(report.rows.is_empty());
    }

    #[test]
    fn rows_sort_by_total_descending() {
        let small = ContactId::new();
        let large = ContactId::new();
        let invoices = vec![
            open_invoice(small, dec!(10), Some(today())),
            open_invoice(large, dec!(500), Some(today())),
        ];

        let report = age_receivables(&invoices, today());
        assert_eq!(report.rows[0].contact_id, large);
        assert_eq!(report.rows[1].contact_id, small);
    }

    proptest! {
        /// Per customer, the five buckets always sum to the customer total,
        /// and the customer totals sum to the grand total. Decimal-exact.
        #[test]
        fn bucket_sums_are_exact(
            entries in prop::collection::vec(
                (0u8..4, -30i64..400, 1i64..1_000_000),
                0..40,
            )
        ) {
            let contacts: Vec<ContactId> = (0..4).map(|_| ContactId::new()).collect();
            let invoices: Vec<Invoice> = entries
                .iter()
                .map(|(c, days, cents)| {
                    // Two-decimal-place amounts, exact.
                    let balance = Decimal::new(*cents, 2);
                    open_invoice(
                        contacts[*c as usize],
                        balance,
                        Some(today() - Duration::days(*days)),
                    )
                })
                .collect();

            let report = age_receivables(&invoices, today());

            let mut rollup = Decimal::ZERO;
            for row in &report.rows {
                let bucket_sum =
                    row.current + row.days_1_30 + row.days_31_60 + row.days_61_90 + row.over_90;
                prop_assert_eq!(bucket_sum, row.total);
                rollup += row.total;
            }
            prop_assert_eq!(rollup, report.totals.grand_total);
        }
    }
}
