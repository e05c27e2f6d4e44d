//! Royalty liability and advance-recoupment aggregation.
//!
//! Pure transforms over queried snapshots. All money math is exact decimal;
//! averages are the only place division happens and they are zero-guarded.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use imprint_core::{AuthorId, TitleId};

use crate::contract::{Contract, ContractId};
use crate::statement::Statement;

/// Per-author outstanding liability row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLiability {
    pub author_id: AuthorId,
    pub statement_count: usize,
    pub total_owed: Decimal,
    pub oldest_period_end: NaiveDate,
}

/// Tenant-wide liability summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilitySummary {
    pub total_unpaid: Decimal,
    pub author_count: usize,
    pub oldest_period_end: Option<NaiveDate>,
    /// `total_unpaid / author_count`; zero when there are no authors.
    pub average_per_author: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilityReport {
    pub rows: Vec<AuthorLiability>,
    pub summary: LiabilitySummary,
}

/// Remaining advance on a contract that is still recouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceBalance {
    pub contract_id: ContractId,
    pub author_id: AuthorId,
    pub title_id: TitleId,
    pub advance_amount: Decimal,
    pub advance_recouped: Decimal,
    pub remaining: Decimal,
}

/// Group unpaid statements by author and derive the tenant-wide summary.
///
/// Every statement counts (the schema has no paid flag). Rows sort by total
/// owed descending; the per-author totals always sum to `total_unpaid`.
pub fn liability_report(statements: &[Statement]) -> LiabilityReport {
    let mut by_author: HashMap<AuthorId, AuthorLiability> = HashMap::new();

    for statement in statements {
        by_author
            .entry(statement.author_id)
            .and_modify(|row| {
                row.statement_count += 1;
                row.total_owed += statement.net_payable;
                if statement.period_end < row.oldest_period_end {
                    row.oldest_period_end = statement.period_end;
                }
            })
            .or_insert_with(|| AuthorLiability {
                author_id: statement.author_id,
                statement_count: 1,
                total_owed: statement.net_payable,
                oldest_period_end: statement.period_end,
            });
    }

    let mut rows: Vec<AuthorLiability> = by_author.into_values().collect();
    rows.sort_by(|a, b| b.total_owed.cmp(&a.total_owed));

    let total_unpaid: Decimal = rows.iter().map(|r| r.total_owed).sum();
    let author_count = rows.len();
    let oldest_period_end = rows.iter().map(|r| r.oldest_period_end).min();
    let average_per_author = if author_count == 0 {
        Decimal::ZERO
    } else {
        total_unpaid / Decimal::from(author_count as u64)
    };

    LiabilityReport {
        rows,
        summary: LiabilitySummary {
            total_unpaid,
            author_count,
            oldest_period_end,
            average_per_author,
        },
    }
}

/// Contracts still carrying an advance, sorted by remaining balance descending.
pub fn active_advances(contracts: &[Contract]) -> Vec<AdvanceBalance> {
    let mut balances: Vec<AdvanceBalance> = contracts
        .iter()
        .filter(|c| c.has_active_advance())
        .map(|c| AdvanceBalance {
            contract_id: c.id,
            author_id: c.author_id,
            title_id: c.title_id,
            advance_amount: c.advance_amount,
            advance_recouped: c.advance_recouped,
            remaining: c.remaining_advance(),
        })
        .collect();

    balances.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    balances
}
