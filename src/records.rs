//! TXT record management for the configured zone.
//!
//! [`RecordStore`] is the only component that talks to the DNS provider and
//! the only place record names are built. The provider's zone is the single
//! source of truth: every read goes to the provider, nothing is cached,
//! since a stale listing would turn the registration existence check into a
//! false negative.

use crate::config::SharedConfig;
use crate::error::{Error, RecordOp};
use crate::zone_api::{Changetype, DynZoneApi, Rrset, RrsetChanges, RrsetRecord};
use serde::Serialize;

const RECORD_TYPE: &str = "TXT";

/// A published name binding: the record's FQDN and the payment URI it
/// carries.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct TxtRecord {
    pub fqdn: String,
    pub uri: String,
}

/// Reads and writes the zone's TXT records through a [`ZoneApi`][crate::zone_api::ZoneApi].
#[derive(Clone)]
pub struct RecordStore {
    config: SharedConfig,
    zone_api: DynZoneApi,
}

impl RecordStore {
    #[must_use]
    pub fn new(config: SharedConfig, zone_api: DynZoneApi) -> Self {
        Self { config, zone_api }
    }

    /// The record name a registered name is published under:
    /// `<name>.user.<record_prefix>.<zone>.`, lowercase, with the mandatory
    /// trailing dot.
    #[must_use]
    pub fn fqdn(&self, name: &str) -> String {
        format!("{}.user.{}.", name.to_lowercase(), self.config.zone_id())
    }

    /// Canonical form for record name comparison. Provider listings may vary
    /// in case and may omit the trailing dot; both sides of any comparison
    /// go through this.
    fn normalize(name: &str) -> String {
        let mut normalized = name.to_lowercase();
        if !normalized.ends_with('.') {
            normalized.push('.');
        }
        normalized
    }

    /// Look up the TXT record for a name, or `None` if the zone holds none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the zone listing can't be fetched.
    pub async fn get(&self, name: &str) -> Result<Option<TxtRecord>, Error> {
        let fqdn = self.fqdn(name);
        let zone = self
            .zone_api
            .get_zone()
            .await
            .map_err(|source| Error::Provider {
                op: RecordOp::Get,
                source,
            })?;

        let target = Self::normalize(&fqdn);
        let record = zone
            .rrsets
            .iter()
            .find(|rr| rr.rtype == RECORD_TYPE && Self::normalize(&rr.name) == target)
            .and_then(|rr| rr.records.as_deref()?.first());
        Ok(record.map(|record| TxtRecord {
            fqdn,
            uri: unquote(&record.content).to_string(),
        }))
    }

    /// Publish `uri` as the TXT record for `name`, creating or overwriting.
    ///
    /// Does not check for an existing record; the caller owns the conflict
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the zone patch fails.
    pub async fn put(&self, name: &str, uri: &str) -> Result<TxtRecord, Error> {
        let fqdn = self.fqdn(name);
        let changes = RrsetChanges {
            rrsets: vec![Rrset {
                name: fqdn.clone(),
                rtype: RECORD_TYPE.to_string(),
                changetype: Some(Changetype::Replace),
                ttl: Some(self.config.record_ttl),
                records: Some(vec![RrsetRecord {
                    content: quote(uri),
                    disabled: false,
                }]),
            }],
        };
        self.zone_api
            .patch_zone(changes)
            .await
            .map_err(|source| Error::Provider {
                op: RecordOp::Add,
                source,
            })?;
        tracing::info!("added TXT record for \"{fqdn}\"");
        Ok(TxtRecord {
            fqdn,
            uri: uri.to_string(),
        })
    }

    /// Remove the TXT record for `name`. The provider's DELETE ensures
    /// absence, so this succeeds whether or not a record existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the zone patch fails.
    pub async fn delete(&self, name: &str) -> Result<bool, Error> {
        let fqdn = self.fqdn(name);
        let changes = RrsetChanges {
            rrsets: vec![Rrset {
                name: fqdn.clone(),
                rtype: RECORD_TYPE.to_string(),
                changetype: Some(Changetype::Delete),
                ttl: None,
                records: None,
            }],
        };
        self.zone_api
            .patch_zone(changes)
            .await
            .map_err(|source| Error::Provider {
                op: RecordOp::Delete,
                source,
            })?;
        tracing::info!("deleted TXT record for \"{fqdn}\"");
        Ok(true)
    }
}

fn quote(uri: &str) -> String {
    format!("\"{uri}\"")
}

/// Strip exactly one leading and one trailing quote character.
fn unquote(content: &str) -> &str {
    let content = content.strip_prefix('"').unwrap_or(content);
    content.strip_suffix('"').unwrap_or(content)
}
