use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imprint_core::impl_uuid_newtype;

/// ISBN record identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsbnId(Uuid);

impl_uuid_newtype!(IsbnId, "IsbnId");

/// ISBN lifecycle status.
///
/// Retired ISBNs are excluded from pool totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsbnStatus {
    Available,
    Assigned,
    Registered,
    Retired,
}

/// An ISBN owned by a tenant, optionally under a publisher prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Isbn {
    pub id: IsbnId,
    pub isbn13: String,
    pub prefix: Option<String>,
    pub status: IsbnStatus,
    /// Set when the ISBN left the available pool.
    pub assigned_at: Option<DateTime<Utc>>,
}
