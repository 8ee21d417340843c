//! Zone management API boundary.
//!
//! The provider's authoritative zone is the only durable store of published
//! records. [`ZoneApi`] is the minimal surface consumed from it: read the
//! full zone listing, and patch resource record sets. Two implementations
//! are provided, [`powerdns::PowerDns`] speaking the provider's HTTP API and
//! [`memory::InMemoryZoneApi`] keeping rrsets in process for tests.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod memory;
pub mod powerdns;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryZoneApi;
pub use powerdns::PowerDns;

/// `DynZoneApi` is a type alias for a shareable [`ZoneApi`] trait object.
#[allow(clippy::module_name_repetitions)]
pub type DynZoneApi = Arc<dyn ZoneApi + Send + Sync>;

/// An async trait describing the zone operations the record store needs from
/// the DNS provider.
#[async_trait::async_trait]
pub trait ZoneApi {
    /// Fetch the configured zone with all of its resource record sets.
    async fn get_zone(&self) -> Result<Zone, ZoneApiError>;

    /// Apply a list of resource record set changes to the configured zone.
    async fn patch_zone(&self, changes: RrsetChanges) -> Result<(), ZoneApiError>;
}

/// `ZoneApiError` enumerates the ways a provider call can fail.
#[allow(clippy::module_name_repetitions)]
#[derive(thiserror::Error, Debug)]
pub enum ZoneApiError {
    /// The HTTP call itself failed: connection refused, TLS, timeout.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A zone as listed by the provider: its resource record sets.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Zone {
    #[serde(default)]
    pub rrsets: Vec<Rrset>,
}

/// One resource record set: a DNS name and type with its record values, or,
/// in a patch, a change to apply at that name and type.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Rrset {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changetype: Option<Changetype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<RrsetRecord>>,
}

/// A single record value within an rrset. TXT content arrives and leaves
/// wrapped in literal double quotes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct RrsetRecord {
    pub content: String,
    pub disabled: bool,
}

/// Patch semantics for one rrset change.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Changetype {
    /// Create the rrset, overwriting any existing one at that name and type.
    Replace,
    /// Remove the rrset if present.
    Delete,
}

/// Request body for a zone patch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct RrsetChanges {
    pub rrsets: Vec<Rrset>,
}
