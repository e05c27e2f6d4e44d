//! Service wiring: tenant stores and collaborators shared by all handlers.

use std::sync::Arc;

use imprint_audit::{AuditEntryId, AuditLog, AuditLogEntry};
use imprint_catalog::{Isbn, IsbnId};
use imprint_parties::{
    InvitationPayload, InvitationProvider, Party, PartyId, PortalUser, PortalUserId, ProviderError,
};
use imprint_receivables::{Invoice, InvoiceId};
use imprint_royalty::{Contract, ContractId, Statement, StatementId};
use imprint_sales::{Sale, SaleId};
use imprint_store::InMemoryTenantStore;

/// Invitation provider used when no external identity provider is wired in:
/// accepts every invitation and logs it. Delivery is out of scope here.
#[derive(Debug, Default)]
pub struct LoggingInvitationProvider;

impl InvitationProvider for LoggingInvitationProvider {
    fn send_invitation(&self, payload: &InvitationPayload) -> Result<(), ProviderError> {
        tracing::info!(
            tenant_id = %payload.tenant_id,
            party_id = %payload.party_id,
            role = %payload.role,
            "portal invitation accepted"
        );
        Ok(())
    }
}

/// All shared state for the HTTP app.
pub struct AppServices {
    pub invoices: InMemoryTenantStore<InvoiceId, Invoice>,
    pub statements: InMemoryTenantStore<StatementId, Statement>,
    pub contracts: InMemoryTenantStore<ContractId, Contract>,
    pub isbns: InMemoryTenantStore<IsbnId, Isbn>,
    pub sales: InMemoryTenantStore<SaleId, Sale>,
    pub parties: InMemoryTenantStore<PartyId, Party>,
    pub portal_users: InMemoryTenantStore<PortalUserId, PortalUser>,
    pub audit: AuditLog<InMemoryTenantStore<AuditEntryId, AuditLogEntry>>,
    pub invitations: Arc<dyn InvitationProvider>,
}

pub fn build_services() -> AppServices {
    build_services_with_provider(Arc::new(LoggingInvitationProvider))
}

pub fn build_services_with_provider(invitations: Arc<dyn InvitationProvider>) -> AppServices {
    AppServices {
        invoices: InMemoryTenantStore::new(),
        statements: InMemoryTenantStore::new(),
        contracts: InMemoryTenantStore::new(),
        isbns: InMemoryTenantStore::new(),
        sales: InMemoryTenantStore::new(),
        parties: InMemoryTenantStore::new(),
        portal_users: InMemoryTenantStore::new(),
        audit: AuditLog::new(InMemoryTenantStore::new()),
        invitations,
    }
}
