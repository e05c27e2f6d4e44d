//! `imprint-parties` — authors, contacts, and portal access grants.

pub mod party;
pub mod portal;

pub use party::{Party, PartyId, PartyKind, TaxId};
pub use portal::{
    InvitationPayload, InvitationProvider, PortalAccessStatus, PortalUser, PortalUserId,
    ProviderError, grant_portal_access,
};
