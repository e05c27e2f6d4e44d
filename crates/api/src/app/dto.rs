//! Request DTOs and parsing helpers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use imprint_catalog::IsbnStatus;
use imprint_core::{AuthorId, DomainError, DomainResult, TitleId};
use imprint_parties::PartyKind;
use imprint_receivables::InvoiceStatus;
use imprint_sales::{DEFAULT_PAGE_SIZE, SaleFormat, SalesChannel, SalesGroupBy, SalesReportParams};

// -------------------------
// Record ingestion
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub contact_id: String,
    pub total: Decimal,
    pub balance_due: Decimal,
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
}

#[derive(Debug, Deserialize)]
pub struct CreateStatementRequest {
    pub author_id: String,
    pub net_payable: Decimal,
    pub period_end: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct CreateContractRequest {
    pub author_id: String,
    pub title_id: String,
    pub advance_amount: Decimal,
    pub advance_recouped: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateIsbnRequest {
    pub isbn13: String,
    pub prefix: Option<String>,
    pub status: IsbnStatus,
    pub assigned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub title_id: String,
    pub format: SaleFormat,
    pub channel: SalesChannel,
    pub sale_date: NaiveDate,
    pub units: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreatePartyRequest {
    pub kind: PartyKind,
    pub name: String,
    pub email: Option<String>,
    pub tax_id_ciphertext: Option<String>,
    pub tax_id_last4: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InviteRequest {
    pub party_id: String,
    pub role: String,
}

// -------------------------
// Report queries
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SalesReportQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub group_by: Option<String>,
    /// Comma-separated title ids.
    pub title_ids: Option<String>,
    /// Comma-separated author ids.
    pub author_ids: Option<String>,
    pub format: Option<String>,
    pub channel: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl SalesReportQuery {
    /// Validate and convert into report parameters.
    ///
    /// Rejects with the first violation encountered.
    pub fn into_params(self) -> DomainResult<SalesReportParams> {
        let start = self
            .start
            .ok_or_else(|| DomainError::validation("start date is required"))?;
        let end = self
            .end
            .ok_or_else(|| DomainError::validation("end date is required"))?;

        let group_by = match self.group_by.as_deref() {
            None | Some("title") => SalesGroupBy::Title,
            Some("format") => SalesGroupBy::Format,
            Some("channel") => SalesGroupBy::Channel,
            Some("month") => SalesGroupBy::Month,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "unknown group_by: {other}"
                )));
            }
        };

        let title_ids = self
            .title_ids
            .as_deref()
            .map(|s| parse_id_list::<TitleId>(s))
            .transpose()?;
        let author_ids = self
            .author_ids
            .as_deref()
            .map(|s| parse_id_list::<AuthorId>(s))
            .transpose()?;
        let format = self.format.as_deref().map(str::parse).transpose()?;
        let channel = self.channel.as_deref().map(str::parse).transpose()?;

        Ok(SalesReportParams {
            start,
            end,
            group_by,
            title_ids,
            author_ids,
            format,
            channel,
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}

fn parse_id_list<T: core::str::FromStr<Err = DomainError>>(s: &str) -> DomainResult<Vec<T>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct AuditLogQuery {
    pub action_type: Option<String>,
    pub resource_type: Option<String>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SalesReportQuery {
        SalesReportQuery {
            start: NaiveDate::from_ymd_opt(2026, 1, 1),
            end: NaiveDate::from_ymd_opt(2026, 6, 30),
            group_by: None,
            title_ids: None,
            author_ids: None,
            format: None,
            channel: None,
            page: None,
            page_size: None,
        }
    }

    #[test]
    fn defaults_apply_for_grouping_and_pagination() {
        let params = query().into_params().unwrap();
        assert_eq!(params.group_by, SalesGroupBy::Title);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn missing_start_is_the_first_violation_reported() {
        let mut q = query();
        q.start = None;
        q.end = None;
        let err = q.into_params().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("start date is required")
        );
    }

    #[test]
    fn id_lists_parse_from_comma_separated_uuids() {
        let a = TitleId::new();
        let b = TitleId::new();
        let mut q = query();
        q.title_ids = Some(format!("{a}, {b}"));
        let params = q.into_params().unwrap();
        assert_eq!(params.title_ids, Some(vec![a, b]));
    }

    #[test]
    fn bad_enum_values_are_validation_failures() {
        let mut q = query();
        q.format = Some("vinyl".to_string());
        assert!(matches!(
            q.into_params(),
            Err(DomainError::Validation(_))
        ));
    }
}
