//! CSV and print-HTML export endpoints.
//!
//! Export generation is synchronous within the request; the payload is the
//! same aggregation the JSON reports serve, serialized by `imprint-export`.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use imprint_auth::Action;
use imprint_export::{aging_csv, aging_html, liability_csv, sales_csv};
use imprint_receivables::age_receivables;
use imprint_royalty::liability_report;
use imprint_sales::sales_report;
use imprint_store::TenantStore;

use crate::app::dto::SalesReportQuery;
use crate::app::errors::domain_error_to_response;
use crate::app::services::AppServices;
use crate::authz::require;
use crate::context::{PrincipalContext, TenantContext};

pub fn router() -> Router {
    Router::new()
        .route("/reports/ar-aging/export.csv", get(ar_aging_csv))
        .route("/reports/ar-aging/print", get(ar_aging_print))
        .route("/reports/royalty-liability/export.csv", get(royalty_csv))
        .route("/reports/sales/export.csv", get(sales_export_csv))
}

fn csv_response(body: String) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response()
}

fn html_response(body: String) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn ar_aging_csv(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ExportCsv) {
        return denied;
    }

    let invoices = services.invoices.list(tenant.scope());
    let report = age_receivables(&invoices, Utc::now().date_naive());
    csv_response(aging_csv(&report, Utc::now()))
}

pub async fn ar_aging_print(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ExportCsv) {
        return denied;
    }

    let invoices = services.invoices.list(tenant.scope());
    let report = age_receivables(&invoices, Utc::now().date_naive());
    html_response(aging_html(&report))
}

pub async fn royalty_csv(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ExportCsv) {
        return denied;
    }

    let statements = services.statements.list(tenant.scope());
    let report = liability_report(&statements);
    csv_response(liability_csv(&report, Utc::now()))
}

pub async fn sales_export_csv(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<SalesReportQuery>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ExportCsv) {
        return denied;
    }

    let params = match query.into_params() {
        Ok(params) => params,
        Err(e) => return domain_error_to_response(e),
    };

    let sales = services.sales.list(tenant.scope());
    let contracts = services.contracts.list(tenant.scope());
    match sales_report(&sales, &contracts, &params) {
        Ok(report) => csv_response(sales_csv(&report, Utc::now())),
        Err(e) => domain_error_to_response(e),
    }
}
