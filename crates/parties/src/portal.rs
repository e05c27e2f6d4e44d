//! Portal access grants: a two-phase reserve → confirm/release operation.
//!
//! The local portal-user record is written in `Reserved` state before the
//! external invitation provider is called. Provider success confirms the
//! record to `Active`; provider failure releases the reservation, so a
//! half-granted user never survives a downstream failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use imprint_core::{DomainError, DomainResult, TenantId, impl_uuid_newtype};
use imprint_store::{TenantScope, TenantStore};

use crate::party::PartyId;

/// Portal user identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortalUserId(Uuid);

impl_uuid_newtype!(PortalUserId, "PortalUserId");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalAccessStatus {
    /// Local record written; provider not yet confirmed.
    Reserved,
    /// Provider accepted the invitation.
    Active,
}

/// Local portal-user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: PortalUserId,
    pub party_id: PartyId,
    pub role: String,
    pub status: PortalAccessStatus,
    pub invited_at: DateTime<Utc>,
}

/// Opaque metadata payload handed to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationPayload {
    pub tenant_id: TenantId,
    pub party_id: PartyId,
    pub role: String,
}

#[derive(Debug, Error)]
#[error("invitation provider failed: {0}")]
pub struct ProviderError(pub String);

/// External identity provider issuing portal invitations and sending email.
pub trait InvitationProvider: Send + Sync {
    fn send_invitation(&self, payload: &InvitationPayload) -> Result<(), ProviderError>;
}

/// Grant portal access to a party.
///
/// Phase one reserves the local record; phase two calls the provider and
/// either confirms or releases. Returns the active portal user on success.
pub fn grant_portal_access<S, P>(
    scope: &TenantScope,
    store: &S,
    provider: &P,
    party_id: PartyId,
    role: String,
    now: DateTime<Utc>,
) -> DomainResult<PortalUser>
where
    S: TenantStore<PortalUserId, PortalUser>,
    P: InvitationProvider + ?Sized,
{
    let mut user = PortalUser {
        id: PortalUserId::new(),
        party_id,
        role: role.clone(),
        status: PortalAccessStatus::Reserved,
        invited_at: now,
    };
    store.upsert(scope, user.id, user.clone());

    let payload = InvitationPayload {
        tenant_id: scope.tenant_id(),
        party_id,
        role,
    };

    match provider.send_invitation(&payload) {
        Ok(()) => {
            user.status = PortalAccessStatus::Active;
            store.upsert(scope, user.id, user.clone());
            Ok(user)
        }
        Err(e) => {
            // Release the reservation; the local write must not outlive the
            // provider failure.
            store.remove(scope, &user.id);
            tracing::warn!(party_id = %party_id, error = %e, "portal invitation failed; reservation released");
            Err(DomainError::downstream(e.to_string()))
        }
    }
}
