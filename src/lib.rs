//! bip353d
//!
//! A [BIP353] name registration service. A user claims a human-readable name
//! and binds it to a `bitcoin:` payment URI (an on-chain address or a
//! [BOLT 12] offer); the binding is published as the DNS TXT record
//! `<name>.user._bitcoin-payment.<zone>.` through an authoritative DNS
//! provider's zone management HTTP API. This service never answers DNS
//! queries itself, and holds no state of its own: the provider's zone is the
//! only durable store.
//!
//! [BIP353]: https://github.com/bitcoin/bips/blob/master/bip-0353.mediawiki
//! [BOLT 12]: https://bolt12.org
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod records;
pub mod validate;
pub mod zone_api;

pub use api::new as new_http;
pub use config::{Config, SharedConfig};
pub use records::{RecordStore, TxtRecord};
pub use zone_api::{DynZoneApi, InMemoryZoneApi, PowerDns, ZoneApi};
