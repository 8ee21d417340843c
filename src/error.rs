//! Error types.

use crate::validate::ValidationError;
use crate::zone_api::ZoneApiError;
use axum::extract::rejection::JsonRejection;
use std::fmt;

/// Error enumerates the possible bip353d error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a request to an authenticated endpoint carries no
    /// `Authorization` header, or one that isn't of the `Bearer <token>` form.
    #[error("Missing or invalid authorization header")]
    Unauthorized,

    /// Returned when a request carries a well-formed bearer token that doesn't
    /// match [`Config::auth_token`][crate::config::Config::auth_token].
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Returned when a name or payment URI fails one of the rules in
    /// [`validate`][crate::validate].
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Returned when clients `POST` invalid JSON.
    #[error(transparent)]
    JsonExtractorRejection(#[from] JsonRejection),

    /// Returned when registering a name that already has a TXT record in the
    /// zone. Carries the FQDN of the existing record.
    #[error("Name already registered")]
    NameTaken(String),

    /// Returned when looking up a name with no TXT record in the zone.
    #[error("Record not found")]
    RecordNotFound,

    /// Returned when a call to the DNS provider's zone API fails. The message
    /// names the record operation and carries the provider failure verbatim.
    #[error("Failed to {op} DNS record: {source}")]
    Provider {
        op: RecordOp,
        #[source]
        source: ZoneApiError,
    },

    /// Returned at startup when
    /// [`Config::provider_api_url`][crate::config::Config::provider_api_url]
    /// isn't an HTTP or HTTPS URL.
    #[error("provider_api_url (\"{0}\") must be an http:// or https:// URL")]
    InvalidProviderUrl(String),

    /// Returned at startup when a configured secret is shorter than its
    /// minimum length.
    #[error("{name} must be at least {min} characters")]
    WeakSecret { name: &'static str, min: usize },

    /// Returned when the provider HTTP client can't be constructed.
    #[error("failed to build provider HTTP client")]
    HttpClient(#[from] reqwest::Error),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when processing JSON from disk (e.g.
    /// [trying to load a `Config`][crate::config::Config::try_from_file])
    /// fails due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}

/// The record operation a provider failure happened in. Displays as the verb
/// used in the surfaced error message.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RecordOp {
    Get,
    Add,
    Delete,
}

impl fmt::Display for RecordOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Add => "add",
            Self::Delete => "delete",
        })
    }
}
