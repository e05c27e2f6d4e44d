use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Query},
    routing::get,
};
use chrono::Utc;

use imprint_auth::Action;
use imprint_receivables::age_receivables;
use imprint_royalty::{active_advances, liability_report};
use imprint_sales::sales_report;
use imprint_store::TenantStore;

use crate::app::dto::SalesReportQuery;
use crate::app::errors::{domain_error_to_response, ok};
use crate::app::services::AppServices;
use crate::authz::require;
use crate::context::{PrincipalContext, TenantContext};

pub fn router() -> Router {
    Router::new()
        .route("/ar-aging", get(get_ar_aging))
        .route("/royalty-liability", get(get_royalty_liability))
        .route("/isbn-status", get(get_isbn_status))
        .route("/sales", get(get_sales))
}

pub async fn get_ar_aging(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ArAging) {
        return denied;
    }

    let invoices = services.invoices.list(tenant.scope());
    let report = age_receivables(&invoices, Utc::now().date_naive());
    ok(serde_json::json!(report))
}

pub async fn get_royalty_liability(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::RoyaltyLiability) {
        return denied;
    }

    let statements = services.statements.list(tenant.scope());
    let contracts = services.contracts.list(tenant.scope());
    let report = liability_report(&statements);
    let advances = active_advances(&contracts);

    ok(serde_json::json!({
        "rows": report.rows,
        "summary": report.summary,
        "advances": advances,
    }))
}

pub async fn get_isbn_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::IsbnStatus) {
        return denied;
    }

    let isbns = services.isbns.list(tenant.scope());
    let report = imprint_catalog::burn_report(&isbns, Utc::now());
    ok(serde_json::json!(report))
}

pub async fn get_sales(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<SalesReportQuery>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::SalesReport) {
        return denied;
    }

    let params = match query.into_params() {
        Ok(params) => params,
        Err(e) => return domain_error_to_response(e),
    };

    let sales = services.sales.list(tenant.scope());
    let contracts = services.contracts.list(tenant.scope());
    match sales_report(&sales, &contracts, &params) {
        Ok(report) => ok(serde_json::json!(report)),
        Err(e) => domain_error_to_response(e),
    }
}
