//! Revenue grouping over sale records.
//!
//! Groups a date-ranged snapshot by title, format, channel, or calendar
//! month, with optional title/author/format/channel filters. The author
//! filter resolves to contracted title ids first and short-circuits to an
//! empty result when no titles match.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use imprint_core::{AuthorId, DomainError, DomainResult, TitleId};
use imprint_royalty::Contract;

use crate::sale::{Sale, SaleFormat, SalesChannel};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Grouping axis for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesGroupBy {
    Title,
    Format,
    Channel,
    Month,
}

/// Query parameters for the sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReportParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub group_by: SalesGroupBy,
    pub title_ids: Option<Vec<TitleId>>,
    pub author_ids: Option<Vec<AuthorId>>,
    pub format: Option<SaleFormat>,
    pub channel: Option<SalesChannel>,
    pub page: usize,
    pub page_size: usize,
}

impl SalesReportParams {
    pub fn new(start: NaiveDate, end: NaiveDate, group_by: SalesGroupBy) -> Self {
        Self {
            start,
            end,
            group_by,
            title_ids: None,
            author_ids: None,
            format: None,
            channel: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    fn validate(&self) -> DomainResult<()> {
        if self.end < self.start {
            return Err(DomainError::validation(
                "end date must not be before start date",
            ));
        }
        if self.page == 0 {
            return Err(DomainError::validation("page must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(DomainError::validation("page_size must be at least 1"));
        }
        Ok(())
    }
}

/// One grouped row. `key` renders the group (title id, format/channel label,
/// or `YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesGroupRow {
    pub key: String,
    pub units: i64,
    pub revenue: Decimal,
    /// `revenue / units`; zero when `units` is zero.
    pub avg_unit_price: Decimal,
}

/// Totals across every matching sale (not just the current page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub units: i64,
    pub revenue: Decimal,
    pub avg_unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    pub rows: Vec<SalesGroupRow>,
    pub totals: SalesTotals,
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
}

impl SalesReport {
    fn empty(params: &SalesReportParams) -> Self {
        Self {
            rows: Vec::new(),
            totals: SalesTotals {
                units: 0,
                revenue: Decimal::ZERO,
                avg_unit_price: Decimal::ZERO,
            },
            page: params.page,
            page_size: params.page_size,
            total_rows: 0,
        }
    }
}

fn avg_unit_price(revenue: Decimal, units: i64) -> Decimal {
    if units == 0 {
        Decimal::ZERO
    } else {
        revenue / Decimal::from(units)
    }
}

fn group_key(sale: &Sale, group_by: SalesGroupBy) -> String {
    match group_by {
        SalesGroupBy::Title => sale.title_id.to_string(),
        SalesGroupBy::Format => sale.format.as_str().to_string(),
        SalesGroupBy::Channel => sale.channel.as_str().to_string(),
        SalesGroupBy::Month => sale.sale_date.format("%Y-%m").to_string(),
    }
}

/// Resolve an author set to the title ids under contract to those authors.
fn titles_for_authors(author_ids: &[AuthorId], contracts: &[Contract]) -> HashSet<TitleId> {
    let authors: HashSet<AuthorId> = author_ids.iter().copied().collect();
    contracts
        .iter()
        .filter(|c| authors.contains(&c.author_id))
        .map(|c| c.title_id)
        .collect()
}

/// Build the grouped sales report over a snapshot of sales and contracts.
///
/// Rows sort by revenue descending and paginate after sorting; totals always
/// cover the full filtered set.
pub fn sales_report(
    sales: &[Sale],
    contracts: &[Contract],
    params: &SalesReportParams,
) -> DomainResult<SalesReport> {
    params.validate()?;

    // Phase one of the author filter: authors -> contracted titles. An
    // author set with no contracted titles matches nothing.
    let author_titles: Option<HashSet<TitleId>> = match &params.author_ids {
        Some(author_ids) => {
            let titles = titles_for_authors(author_ids, contracts);
            if titles.is_empty() {
                return Ok(SalesReport::empty(params));
            }
            Some(titles)
        }
        None => None,
    };

    let title_filter: Option<HashSet<TitleId>> =
        params.title_ids.as_ref().map(|ids| ids.iter().copied().collect());

    let mut groups: HashMap<String, (i64, Decimal)> = HashMap::new();
    let mut total_units: i64 = 0;
    let mut total_revenue = Decimal::ZERO;

    for sale in sales {
        if sale.sale_date < params.start || sale.sale_date > params.end {
            continue;
        }
        if let Some(titles) = &title_filter
            && !titles.contains(&sale.title_id)
        {
            continue;
        }
        if let Some(titles) = &author_titles
            && !titles.contains(&sale.title_id)
        {
            continue;
        }
        if let Some(format) = params.format
            && sale.format != format
        {
            continue;
        }
        if let Some(channel) = params.channel
            && sale.channel != channel
        {
            continue;
        }

        let entry = groups
            .entry(group_key(sale, params.group_by))
            .or_insert((0, Decimal::ZERO));
        entry.0 += sale.units;
        entry.1 += sale.revenue;
        total_units += sale.units;
        total_revenue += sale.revenue;
    }

    let mut rows: Vec<SalesGroupRow> = groups
        .into_iter()
        .map(|(key, (units, revenue))| SalesGroupRow {
            key,
            units,
            revenue,
            avg_unit_price: avg_unit_price(revenue, units),
        })
        .collect();
    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.key.cmp(&b.key)));

    let total_rows = rows.len();
    let offset = (params.page - 1).saturating_mul(params.page_size);
    let rows: Vec<SalesGroupRow> = rows
        .into_iter()
        .skip(offset)
        .take(params.page_size)
        .collect();

    Ok(SalesReport {
        rows,
        totals: SalesTotals {
            units: total_units,
            revenue: total_revenue,
            avg_unit_price: avg_unit_price(total_revenue, total_units),
        },
        page: params.page,
        page_size: params.page_size,
        total_rows,
    })
}
