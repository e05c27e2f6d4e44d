//! `imprint-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. Role policy
//! lives in one table ([`policy::permitted_roles`]); every action check goes
//! through [`authorize`].

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod policy;
pub mod roles;

pub use authorize::{AuthzError, Principal, authorize};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use policy::{Action, DENIAL_MESSAGE, permitted_roles};
pub use roles::Role;
