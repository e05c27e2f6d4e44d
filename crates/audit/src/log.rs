//! Append-only audit log.
//!
//! [`AuditLog`] wraps a tenant store and exposes only `record` and `list`:
//! there is no update or delete surface, so entries are immutable by
//! construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use imprint_core::{UserId, impl_uuid_newtype};
use imprint_store::{TenantScope, TenantStore};

/// Audit entry identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEntryId(Uuid);

impl_uuid_newtype!(AuditEntryId, "AuditEntryId");

/// One immutable audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: AuditEntryId,
    pub actor: UserId,
    pub action_type: String,
    pub resource_type: String,
    pub resource_id: String,
    pub before: Option<JsonValue>,
    pub after: Option<JsonValue>,
    pub recorded_at: DateTime<Utc>,
}

/// Read filter for audit listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogFilter {
    pub action_type: Option<String>,
    pub resource_type: Option<String>,
    pub limit: Option<usize>,
}

/// Tenant-scoped audit log over a tenant store.
pub struct AuditLog<S> {
    store: S,
}

impl<S> AuditLog<S>
where
    S: TenantStore<AuditEntryId, AuditLogEntry>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append an entry. Entries are never mutated afterwards.
    pub fn record(&self, scope: &TenantScope, entry: AuditLogEntry) {
        self.store.upsert(scope, entry.id, entry);
    }

    /// List entries, newest first, applying the filter.
    pub fn list(&self, scope: &TenantScope, filter: &AuditLogFilter) -> Vec<AuditLogEntry> {
        let mut entries = self.store.list(scope);

        entries.retain(|e| {
            filter
                .action_type
                .as_ref()
                .is_none_or(|a| &e.action_type == a)
                && filter
                    .resource_type
                    .as_ref()
                    .is_none_or(|r| &e.resource_type == r)
        });
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        if let Some(limit) = filter.limit {
            entries.truncate(limit);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use imprint_core::TenantId;
    use imprint_store::InMemoryTenantStore;

    use super::*;

    fn entry(action_type: &str, recorded_at: DateTime<Utc>) -> AuditLogEntry {
        AuditLogEntry {
            id: AuditEntryId::new(),
            actor: UserId::new(),
            action_type: action_type.to_string(),
            resource_type: "invoice".to_string(),
            resource_id: Uuid::now_v7().to_string(),
            before: None,
            after: Some(serde_json::json!({ "status": "sent" })),
            recorded_at,
        }
    }

    fn log() -> AuditLog<InMemoryTenantStore<AuditEntryId, AuditLogEntry>> {
        AuditLog::new(InMemoryTenantStore::new())
    }

    #[test]
    fn entries_list_newest_first() {
        let log = log();
        let scope = TenantScope::resolve(TenantId::new());
        let now = Utc::now();

        log.record(&scope, entry("create", now - Duration::minutes(2)));
        log.record(&scope, entry("update", now));

        let entries = log.list(&scope, &AuditLogFilter::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action_type, "update");
    }

    #[test]
    fn filter_narrows_by_action_type_and_limit() {
        let log = log();
        let scope = TenantScope::resolve(TenantId::new());
        let now = Utc::now();

        for i in 0..5 {
            log.record(&scope, entry("create", now - Duration::minutes(i)));
        }
        log.record(&scope, entry("delete", now));

        let filter = AuditLogFilter {
            action_type: Some("create".to_string()),
            resource_type: None,
            limit: Some(3),
        };
        let entries = log.list(&scope, &filter);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.action_type == "create"));
    }

    #[test]
    fn entries_are_tenant_isolated() {
        let log = log();
        let scope_a = TenantScope::resolve(TenantId::new());
        let scope_b = TenantScope::resolve(TenantId::new());

        log.record(&scope_a, entry("create", Utc::now()));

        assert_eq!(log.list(&scope_a, &AuditLogFilter::default()).len(), 1);
        assert!(log.list(&scope_b, &AuditLogFilter::default()).is_empty());
    }
}
