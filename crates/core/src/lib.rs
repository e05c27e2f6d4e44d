//! `imprint-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers and the shared error model. Money amounts across
//! the workspace are `rust_decimal::Decimal` — never binary floating point.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AuthorId, ContactId, TenantId, TitleId, UserId};
