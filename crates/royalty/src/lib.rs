//! `imprint-royalty` — royalty statements, contracts, and liability reporting.

pub mod contract;
pub mod liability;
pub mod statement;

pub use contract::{Contract, ContractId};
pub use liability::{
    AdvanceBalance, AuthorLiability, LiabilityReport, LiabilitySummary, active_advances,
    liability_report,
};
pub use statement::{Statement, StatementId};
