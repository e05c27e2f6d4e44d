//! Record ingestion endpoints.
//!
//! Each create validates input, writes through the tenant scope, and appends
//! an audit entry with the after-image.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;

use imprint_audit::{AuditEntryId, AuditLogEntry};
use imprint_auth::Action;
use imprint_catalog::{Isbn, IsbnId};
use imprint_core::{AuthorId, ContactId, DomainError, TitleId, UserId};
use imprint_parties::{Party, PartyId, TaxId};
use imprint_receivables::{Invoice, InvoiceId};
use imprint_royalty::{Contract, ContractId, Statement, StatementId};
use imprint_sales::{Sale, SaleId};
use imprint_store::{TenantScope, TenantStore};

use crate::app::dto::{
    CreateContractRequest, CreateInvoiceRequest, CreateIsbnRequest, CreatePartyRequest,
    CreateSaleRequest, CreateStatementRequest,
};
use crate::app::errors::{domain_error_to_response, ok};
use crate::app::services::AppServices;
use crate::authz::require;
use crate::context::{PrincipalContext, TenantContext};

pub fn router() -> Router {
    Router::new()
        .route("/invoices", post(create_invoice))
        .route("/statements", post(create_statement))
        .route("/contracts", post(create_contract))
        .route("/isbns", post(create_isbn))
        .route("/sales", post(create_sale))
        .route("/parties", post(create_party))
}

fn audit_create(
    services: &AppServices,
    scope: &TenantScope,
    actor: UserId,
    resource_type: &str,
    resource_id: String,
    after: serde_json::Value,
) {
    services.audit.record(
        scope,
        AuditLogEntry {
            id: AuditEntryId::new(),
            actor,
            action_type: "create".to_string(),
            resource_type: resource_type.to_string(),
            resource_id,
            before: None,
            after: Some(after),
            recorded_at: Utc::now(),
        },
    );
}

fn non_negative(value: Decimal, field: &str) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        Err(DomainError::validation(format!(
            "{field} must not be negative"
        )))
    } else {
        Ok(())
    }
}

pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<CreateInvoiceRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ManageRecords) {
        return denied;
    }

    let result = (|| -> Result<Invoice, DomainError> {
        let contact_id: ContactId = req.contact_id.parse()?;
        non_negative(req.total, "total")?;
        non_negative(req.balance_due, "balance_due")?;
        if req.balance_due > req.total {
            return Err(DomainError::invariant("balance_due exceeds total"));
        }
        Ok(Invoice {
            id: InvoiceId::new(),
            contact_id,
            total: req.total,
            balance_due: req.balance_due,
            due_date: req.due_date,
            status: req.status,
        })
    })();

    match result {
        Ok(invoice) => {
            services
                .invoices
                .upsert(tenant.scope(), invoice.id, invoice.clone());
            audit_create(
                &services,
                tenant.scope(),
                principal.user_id(),
                "invoice",
                invoice.id.to_string(),
                serde_json::json!(invoice),
            );
            ok(serde_json::json!({ "id": invoice.id }))
        }
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn create_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<CreateStatementRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ManageRecords) {
        return denied;
    }

    let author_id: AuthorId = match req.author_id.parse() {
        Ok(id) => id,
        Err(e) => return domain_error_to_response(e),
    };

    let statement = Statement {
        id: StatementId::new(),
        author_id,
        net_payable: req.net_payable,
        period_end: req.period_end,
    };
    services
        .statements
        .upsert(tenant.scope(), statement.id, statement.clone());
    audit_create(
        &services,
        tenant.scope(),
        principal.user_id(),
        "statement",
        statement.id.to_string(),
        serde_json::json!(statement),
    );
    ok(serde_json::json!({ "id": statement.id }))
}

pub async fn create_contract(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<CreateContractRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ManageRecords) {
        return denied;
    }

    let result = (|| -> Result<Contract, DomainError> {
        let author_id: AuthorId = req.author_id.parse()?;
        let title_id: TitleId = req.title_id.parse()?;
        non_negative(req.advance_amount, "advance_amount")?;
        non_negative(req.advance_recouped, "advance_recouped")?;
        if req.advance_recouped > req.advance_amount {
            return Err(DomainError::invariant(
                "advance_recouped exceeds advance_amount",
            ));
        }
        Ok(Contract {
            id: ContractId::new(),
            author_id,
            title_id,
            advance_amount: req.advance_amount,
            advance_recouped: req.advance_recouped,
        })
    })();

    match result {
        Ok(contract) => {
            services
                .contracts
                .upsert(tenant.scope(), contract.id, contract.clone());
            audit_create(
                &services,
                tenant.scope(),
                principal.user_id(),
                "contract",
                contract.id.to_string(),
                serde_json::json!(contract),
            );
            ok(serde_json::json!({ "id": contract.id }))
        }
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn create_isbn(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<CreateIsbnRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ManageRecords) {
        return denied;
    }

    let isbn = Isbn {
        id: IsbnId::new(),
        isbn13: req.isbn13,
        prefix: req.prefix,
        status: req.status,
        assigned_at: req.assigned_at,
    };
    services.isbns.upsert(tenant.scope(), isbn.id, isbn.clone());
    audit_create(
        &services,
        tenant.scope(),
        principal.user_id(),
        "isbn",
        isbn.id.to_string(),
        serde_json::json!(isbn),
    );
    ok(serde_json::json!({ "id": isbn.id }))
}

pub async fn create_sale(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<CreateSaleRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ManageRecords) {
        return denied;
    }

    let result = (|| -> Result<Sale, DomainError> {
        let title_id: TitleId = req.title_id.parse()?;
        if req.units < 0 {
            return Err(DomainError::validation("units must not be negative"));
        }
        non_negative(req.revenue, "revenue")?;
        Ok(Sale {
            id: SaleId::new(),
            title_id,
            format: req.format,
            channel: req.channel,
            sale_date: req.sale_date,
            units: req.units,
            revenue: req.revenue,
        })
    })();

    match result {
        Ok(sale) => {
            services.sales.upsert(tenant.scope(), sale.id, sale.clone());
            audit_create(
                &services,
                tenant.scope(),
                principal.user_id(),
                "sale",
                sale.id.to_string(),
                serde_json::json!(sale),
            );
            ok(serde_json::json!({ "id": sale.id }))
        }
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn create_party(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(req): Json<CreatePartyRequest>,
) -> axum::response::Response {
    if let Err(denied) = require(&tenant, &principal, Action::ManageRecords) {
        return denied;
    }

    if req.name.trim().is_empty() {
        return domain_error_to_response(DomainError::validation("name must not be empty"));
    }

    let tax_id = req
        .tax_id_ciphertext
        .map(|ciphertext| TaxId::from_parts(ciphertext, req.tax_id_last4));
    let party = Party {
        id: PartyId::new(),
        kind: req.kind,
        name: req.name,
        email: req.email,
        tax_id,
    };
    services
        .parties
        .upsert(tenant.scope(), party.id, party.clone());
    audit_create(
        &services,
        tenant.scope(),
        principal.user_id(),
        "party",
        party.id.to_string(),
        // Serializes the masked tax id only.
        serde_json::json!(party),
    );
    ok(serde_json::json!({ "id": party.id }))
}
