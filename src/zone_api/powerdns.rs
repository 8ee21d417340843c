//! The HTTP-backed implementation of the [`ZoneApi`] trait.

use crate::config::Config;
use crate::error::Error;
use crate::zone_api::{RrsetChanges, Zone, ZoneApi, ZoneApiError};

const API_KEY_HEADER: &str = "X-API-Key";

/// Client for a PowerDNS-style zone management HTTP API.
///
/// Calls are scoped to a single server and zone:
/// `<provider_api_url>/api/v1/servers/<server_id>/zones/<zone_id>`. The API
/// key goes out as `X-API-Key` on every request, and every call is bounded
/// by the configured provider timeout. A timeout surfaces like any other
/// failed call.
#[derive(Debug, Clone)]
pub struct PowerDns {
    http: reqwest::Client,
    api_key: String,
    zone_url: String,
}

impl PowerDns {
    /// Build a provider client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the underlying HTTP client can't be
    /// constructed.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.provider_timeout)
            .build()?;
        let zone_url = format!(
            "{}/api/v1/servers/{}/zones/{}",
            config.provider_api_url.trim_end_matches('/'),
            config.provider_server_id,
            config.zone_id(),
        );
        Ok(Self {
            http,
            api_key: config.provider_api_key.clone(),
            zone_url,
        })
    }

    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ZoneApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ZoneApiError::Status { status, body })
    }
}

#[async_trait::async_trait]
impl ZoneApi for PowerDns {
    async fn get_zone(&self) -> Result<Zone, ZoneApiError> {
        let response = self
            .http
            .get(&self.zone_url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn patch_zone(&self, changes: RrsetChanges) -> Result<(), ZoneApiError> {
        let response = self
            .http
            .patch(&self.zone_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&changes)
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }
}
