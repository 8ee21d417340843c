//! An in-memory implementation of the [`ZoneApi`] trait.
//!
//! Holds a zone's rrsets in process and applies patches with the same
//! REPLACE and DELETE semantics the provider uses. Nothing is durable, and
//! `main` never constructs one; it exists so the record store and the API
//! routes can be exercised without a provider.

use crate::zone_api::{Changetype, Rrset, RrsetChanges, Zone, ZoneApi, ZoneApiError};
use tokio::sync::RwLock;

#[derive(Default, Debug)]
pub struct InMemoryZoneApi {
    zone: RwLock<Zone>,
}

impl InMemoryZoneApi {
    /// A zone seeded with the given rrsets.
    #[must_use]
    pub fn with_rrsets(rrsets: Vec<Rrset>) -> Self {
        Self {
            zone: RwLock::new(Zone { rrsets }),
        }
    }
}

#[async_trait::async_trait]
impl ZoneApi for InMemoryZoneApi {
    async fn get_zone(&self) -> Result<Zone, ZoneApiError> {
        Ok(self.zone.read().await.clone())
    }

    async fn patch_zone(&self, changes: RrsetChanges) -> Result<(), ZoneApiError> {
        let mut zone = self.zone.write().await;
        for change in changes.rrsets {
            zone.rrsets
                .retain(|rr| !(rr.name == change.name && rr.rtype == change.rtype));
            if change.changetype == Some(Changetype::Replace) {
                zone.rrsets.push(Rrset {
                    changetype: None,
                    ..change
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone_api::RrsetRecord;

    fn txt_rrset(name: &str, content: &str, changetype: Option<Changetype>) -> Rrset {
        Rrset {
            name: name.to_string(),
            rtype: "TXT".to_string(),
            changetype,
            ttl: Some(300),
            records: Some(vec![RrsetRecord {
                content: content.to_string(),
                disabled: false,
            }]),
        }
    }

    #[tokio::test]
    async fn replace_overwrites_existing_rrset() {
        let api = InMemoryZoneApi::with_rrsets(vec![txt_rrset("a.example.", "\"old\"", None)]);
        api.patch_zone(RrsetChanges {
            rrsets: vec![txt_rrset("a.example.", "\"new\"", Some(Changetype::Replace))],
        })
        .await
        .unwrap();

        let zone = api.get_zone().await.unwrap();
        assert_eq!(zone.rrsets.len(), 1);
        assert_eq!(
            zone.rrsets[0].records.as_deref().unwrap()[0].content,
            "\"new\""
        );
        assert_eq!(zone.rrsets[0].changetype, None);
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_rrset() {
        let api = InMemoryZoneApi::with_rrsets(vec![
            txt_rrset("a.example.", "\"a\"", None),
            txt_rrset("b.example.", "\"b\"", None),
        ]);
        api.patch_zone(RrsetChanges {
            rrsets: vec![Rrset {
                name: "a.example.".to_string(),
                rtype: "TXT".to_string(),
                changetype: Some(Changetype::Delete),
                ttl: None,
                records: None,
            }],
        })
        .await
        .unwrap();

        let zone = api.get_zone().await.unwrap();
        assert_eq!(zone.rrsets.len(), 1);
        assert_eq!(zone.rrsets[0].name, "b.example.");
    }

    #[tokio::test]
    async fn delete_of_absent_rrset_succeeds() {
        let api = InMemoryZoneApi::default();
        api.patch_zone(RrsetChanges {
            rrsets: vec![Rrset {
                name: "missing.example.".to_string(),
                rtype: "TXT".to_string(),
                changetype: Some(Changetype::Delete),
                ttl: None,
                records: None,
            }],
        })
        .await
        .unwrap();
        assert!(api.get_zone().await.unwrap().rrsets.is_empty());
    }
}
