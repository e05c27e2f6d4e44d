//! ISBN burn-rate and runout estimation.
//!
//! Burn rate is a 6-month trailing average of assignments; the runout
//! estimate projects when the available pool exhausts. Both are defined to be
//! division-safe: a zero rate or an empty pool yields `None`, never a panic.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::isbn::{Isbn, IsbnStatus};

const TRAILING_WINDOW_MONTHS: u32 = 6;

/// Pool counts by status. Retired ISBNs are excluded from `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub available: u64,
    pub assigned: u64,
    pub registered: u64,
    pub total: u64,
}

/// Burn-rate report for the ISBN pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnBurnReport {
    pub pool: PoolSummary,
    /// ISBNs consumed within the trailing 6-month window.
    pub assigned_last_6_months: u64,
    /// Average monthly consumption, rounded to one decimal for display.
    pub monthly_burn_rate: Decimal,
    /// Months until the available pool exhausts, ceiling-rounded.
    /// `None` when the burn rate or the available pool is zero.
    pub runout_months: Option<u64>,
}

/// Count the pool by status.
pub fn pool_summary(isbns: &[Isbn]) -> PoolSummary {
    let mut summary = PoolSummary {
        available: 0,
        assigned: 0,
        registered: 0,
        total: 0,
    };

    for isbn in isbns {
        match isbn.status {
            IsbnStatus::Available => summary.available += 1,
            IsbnStatus::Assigned => summary.assigned += 1,
            IsbnStatus::Registered => summary.registered += 1,
            IsbnStatus::Retired => continue,
        }
        summary.total += 1;
    }

    summary
}

/// Compute the burn-rate report over an ISBN snapshot.
///
/// Consumption counts every ISBN whose `assigned_at` falls inside the
/// trailing window, whatever its current status: an ISBN that moved on to
/// `Registered` was still consumed.
pub fn burn_report(isbns: &[Isbn], now: DateTime<Utc>) -> IsbnBurnReport {
    let pool = pool_summary(isbns);

    let cutoff = now
        .checked_sub_months(Months::new(TRAILING_WINDOW_MONTHS))
        .unwrap_or(now);
    let assigned_last_6_months = isbns
        .iter()
        .filter(|i| i.assigned_at.is_some_and(|at| at > cutoff && at <= now))
        .count() as u64;

    let monthly_burn_rate = (Decimal::from(assigned_last_6_months)
        / Decimal::from(TRAILING_WINDOW_MONTHS))
    .round_dp(1);

    let runout_months = if assigned_last_6_months == 0 || pool.available == 0 {
        None
    } else {
        // ceil(available / (assigned / 6)) in integer arithmetic.
        let numerator = pool.available * u64::from(TRAILING_WINDOW_MONTHS);
        Some(numerator.div_ceil(assigned_last_6_months))
    };

    IsbnBurnReport {
        pool,
        assigned_last_6_months,
        monthly_burn_rate,
        runout_months,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::isbn::IsbnId;

    fn isbn(status: IsbnStatus, assigned_at: Option<DateTime<Utc>>) -> Isbn {
        Isbn {
            id: IsbnId::new(),
            isbn13: "9781234567897".to_string(),
            prefix: Some("978-1-2345".to_string()),
            status,
            assigned_at,
        }
    }

    #[test]
    fn worked_example_12_assigned_30_available() {
        let now = Utc::now();
        let mut isbns: Vec<Isbn> = (0..12)
            .map(|i| {
                isbn(
                    IsbnStatus::Assigned,
                    Some(now - Duration::days(10 + i as i64)),
                )
            })
            .collect();
        isbns.extend((0..30).map(|_| isbn(IsbnStatus::Available, None)));

        let report = burn_report(&isbns, now);
        assert_eq!(report.assigned_last_6_months, 12);
        assert_eq!(report.monthly_burn_rate, dec!(2.0));
        assert_eq!(report.runout_months, Some(15));
    }

    #[test]
    fn zero_consumption_yields_no_runout_estimate() {
        let isbns = vec![isbn(IsbnStatus::Available, None)];
        let report = burn_report(&isbns, Utc::now());
        assert_eq!(report.monthly_burn_rate, dec!(0.0));
        assert_eq!(report.runout_months, None);
    }

    #[test]
    fn empty_pool_yields_no_runout_estimate() {
        let now = Utc::now();
        let isbns = vec![isbn(IsbnStatus::Assigned, Some(now - Duration::days(5)))];
        let report = burn_report(&isbns, now);
        assert!(report.monthly_burn_rate > dec!(0));
        assert_eq!(report.runout_months, None);
    }

    #[test]
    fn assignments_outside_the_window_do_not_count() {
        let now = Utc::now();
        let isbns = vec![
            isbn(IsbnStatus::Assigned, Some(now - Duration::days(400))),
            isbn(IsbnStatus::Assigned, Some(now - Duration::days(30))),
        ];
        let report = burn_report(&isbns, now);
        assert_eq!(report.assigned_last_6_months, 1);
    }

    #[test]
    fn registered_isbns_count_as_consumed() {
        let now = Utc::now();
        let isbns = vec![isbn(IsbnStatus::Registered, Some(now - Duration::days(30)))];
        let report = burn_report(&isbns, now);
        assert_eq!(report.assigned_last_6_months, 1);
    }

    #[test]
    fn retired_isbns_are_excluded_from_pool_totals() {
        let isbns = vec![
            isbn(IsbnStatus::Available, None),
            isbn(IsbnStatus::Retired, None),
        ];
        let summary = pool_summary(&isbns);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn fractional_rate_rounds_to_one_decimal() {
        let now = Utc::now();
        let isbns: Vec<Isbn> = (0..7)
            .map(|_| isbn(IsbnStatus::Assigned, Some(now - Duration::days(15))))
            .collect();
        let report = burn_report(&isbns, now);
        // 7 / 6 = 1.1666... -> 1.2
        assert_eq!(report.monthly_burn_rate, dec!(1.2));
    }
}
