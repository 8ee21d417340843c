use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

const MIN_API_KEY_LEN: usize = 8;
const MIN_AUTH_TOKEN_LEN: usize = 16;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Address the HTTP API listens on.
    pub api_bind_addr: SocketAddr,
    /// Per-request timeout for the HTTP API.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
    /// Base URL of the DNS provider's zone management API.
    pub provider_api_url: String,
    /// API key sent as `X-API-Key` on every provider call.
    pub provider_api_key: String,
    /// Provider server identifier used in API paths.
    #[serde(default = "default_server_id")]
    pub provider_server_id: String,
    /// Timeout for each provider call.
    #[serde(default = "default_provider_timeout")]
    #[serde_as(as = "DurationSeconds<u64>")]
    pub provider_timeout: Duration,
    /// DNS zone names are registered under, e.g. `easybitcoinaddress.me`.
    pub zone: String,
    /// Label between `user` and the zone in published record names.
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,
    /// TTL in seconds for published TXT records.
    #[serde(default = "default_record_ttl")]
    pub record_ttl: u32,
    /// Bearer token required by the register and delete endpoints.
    pub auth_token: String,
}

fn default_server_id() -> String {
    "localhost".to_string()
}

fn default_provider_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_record_prefix() -> String {
    "_bitcoin-payment".to_string()
}

fn default_record_ttl() -> u32 {
    300
}

impl Config {
    /// Load and check a JSON config file. Any missing required field or
    /// failed check is fatal at startup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file can't be read, [`Error::InvalidJSON`]
    /// if it isn't valid config JSON, or the first failing check from
    /// [`validate`][Config::validate].
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.validate()?;
        Ok(conf)
    }

    /// The provider's zone identifier, `<record_prefix>.<zone>`. Also the
    /// suffix of every published record name.
    #[must_use]
    pub fn zone_id(&self) -> String {
        format!("{}.{}", self.record_prefix, self.zone)
    }

    fn validate(&self) -> Result<(), Error> {
        if !self.provider_api_url.starts_with("http://")
            && !self.provider_api_url.starts_with("https://")
        {
            return Err(Error::InvalidProviderUrl(self.provider_api_url.clone()));
        }
        if self.provider_api_key.len() < MIN_API_KEY_LEN {
            return Err(Error::WeakSecret {
                name: "provider_api_key",
                min: MIN_API_KEY_LEN,
            });
        }
        if self.auth_token.len() < MIN_AUTH_TOKEN_LEN {
            return Err(Error::WeakSecret {
                name: "auth_token",
                min: MIN_AUTH_TOKEN_LEN,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
impl Config {
    /// A checked config for tests, pointing the provider at `api_url`.
    pub(crate) fn for_tests(api_url: &str) -> SharedConfig {
        let config: Config = serde_json::from_value(serde_json::json!({
            "api_bind_addr": "127.0.0.1:3000",
            "api_timeout": 5,
            "provider_api_url": api_url,
            "provider_api_key": "test-api-key",
            "zone": "easybitcoinaddress.me",
            "auth_token": "test-auth-token-0123",
        }))
        .unwrap();
        config.validate().unwrap();
        Arc::new(config)
    }
}
