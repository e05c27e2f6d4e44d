//! `imprint-receivables` — invoices and AR aging.

pub mod aging;
pub mod invoice;

pub use aging::{AgingBucket, AgingReport, AgingTotals, CustomerAging, age_receivables};
pub use invoice::{Invoice, InvoiceId, InvoiceStatus};
