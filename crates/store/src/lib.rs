//! `imprint-store` — tenant-isolated storage abstractions.
//!
//! Every read and write in the workspace goes through a [`TenantScope`]
//! capability: query methods take `&TenantScope` instead of a raw `TenantId`,
//! so a query that forgets the tenant predicate does not compile.

pub mod scope;
pub mod tenant_store;

pub use scope::TenantScope;
pub use tenant_store::{InMemoryTenantStore, TenantStore};
