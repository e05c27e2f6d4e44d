//! `imprint-audit` — immutable, append-only audit trail.

pub mod log;

pub use log::{AuditEntryId, AuditLog, AuditLogEntry, AuditLogFilter};
