//! Report-specific CSV/HTML serialization.

use chrono::{DateTime, Utc};

use imprint_parties::Party;
use imprint_receivables::AgingReport;
use imprint_royalty::LiabilityReport;
use imprint_sales::SalesReport;

use crate::csv::CsvBuilder;
use crate::print::render_table;

const AGING_HEADERS: [&str; 7] = ["customer", "current", "1-30", "31-60", "61-90", "90+", "total"];

/// AR aging report as CSV with banner, section header, and totals row.
pub fn aging_csv(report: &AgingReport, generated_at: DateTime<Utc>) -> String {
    let mut builder = CsvBuilder::new()
        .banner(generated_at)
        .section("Accounts Receivable Aging")
        .row(&AGING_HEADERS);

    for row in &report.rows {
        builder = builder.row(&[
            row.contact_id.to_string(),
            row.current.to_string(),
            row.days_1_30.to_string(),
            row.days_31_60.to_string(),
            row.days_61_90.to_string(),
            row.over_90.to_string(),
            row.total.to_string(),
        ]);
    }

    builder
        .row(&[
            "TOTAL".to_string(),
            report.totals.current.to_string(),
            report.totals.days_1_30.to_string(),
            report.totals.days_31_60.to_string(),
            report.totals.days_61_90.to_string(),
            report.totals.over_90.to_string(),
            report.totals.grand_total.to_string(),
        ])
        .finish()
}

/// AR aging report as printable HTML.
pub fn aging_html(report: &AgingReport) -> String {
    let mut rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            vec![
                row.contact_id.to_string(),
                row.current.to_string(),
                row.days_1_30.to_string(),
                row.days_31_60.to_string(),
                row.days_61_90.to_string(),
                row.over_90.to_string(),
                row.total.to_string(),
            ]
        })
        .collect();
    rows.push(vec![
        "TOTAL".to_string(),
        report.totals.current.to_string(),
        report.totals.days_1_30.to_string(),
        report.totals.days_31_60.to_string(),
        report.totals.days_61_90.to_string(),
        report.totals.over_90.to_string(),
        report.totals.grand_total.to_string(),
    ]);
    render_table("Accounts Receivable Aging", &AGING_HEADERS, &rows)
}

/// Sales report as CSV. Rows are the current page; the TOTAL row covers the
/// whole filtered set.
pub fn sales_csv(report: &SalesReport, generated_at: DateTime<Utc>) -> String {
    let mut builder = CsvBuilder::new()
        .banner(generated_at)
        .section("Sales Report")
        .row(&["group", "units", "revenue", "avg_unit_price"]);

    for row in &report.rows {
        builder = builder.row(&[
            row.key.clone(),
            row.units.to_string(),
            row.revenue.to_string(),
            row.avg_unit_price.to_string(),
        ]);
    }

    builder
        .row(&[
            "TOTAL".to_string(),
            report.totals.units.to_string(),
            report.totals.revenue.to_string(),
            report.totals.avg_unit_price.to_string(),
        ])
        .finish()
}

/// Royalty liability report as CSV.
pub fn liability_csv(report: &LiabilityReport, generated_at: DateTime<Utc>) -> String {
    let mut builder = CsvBuilder::new()
        .banner(generated_at)
        .section("Royalty Liability")
        .row(&["author", "statements", "total_owed", "oldest_period_end"]);

    for row in &report.rows {
        builder = builder.row(&[
            row.author_id.to_string(),
            row.statement_count.to_string(),
            row.total_owed.to_string(),
            row.oldest_period_end.to_string(),
        ]);
    }

    builder
        .row(&[
            "TOTAL".to_string(),
            report.rows.iter().map(|r| r.statement_count).sum::<usize>().to_string(),
            report.summary.total_unpaid.to_string(),
            report
                .summary
                .oldest_period_end
                .map(|d| d.to_string())
                .unwrap_or_default(),
        ])
        .finish()
}

/// Contact directory as CSV.
///
/// Contract: tax identifiers appear in masked form only; the raw/encrypted
/// value is excluded from every export path.
pub fn contacts_csv(parties: &[Party], generated_at: DateTime<Utc>) -> String {
    let mut builder = CsvBuilder::new()
        .banner(generated_at)
        .section("Contacts")
        .row(&["name", "email", "tax_id"]);

    for party in parties {
        builder = builder.row(&[
            party.name.clone(),
            party.email.clone().unwrap_or_default(),
            party
                .tax_id
                .as_ref()
                .map(|t| t.masked())
                .unwrap_or_default(),
        ]);
    }

    builder.finish()
}
