//! Request validation rules.
//!
//! Pure checks applied before anything touches the network. The web form
//! mirrors these rules client-side; the checks here are the authoritative
//! ones.

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length of a registered name.
pub const MAX_NAME_LEN: usize = 64;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new("^[a-z0-9]+$").unwrap();
    static ref LNO_PARAM: Regex = Regex::new("[?&]lno=([^&]*)").unwrap();
}

/// `ValidationError` enumerates the rejection rules, one message per rule.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ValidationError {
    /// The name is empty or contains a character outside `[a-z0-9]`.
    #[error("Name must contain only lowercase letters and numbers")]
    NameFormat,

    /// The name is longer than [`MAX_NAME_LEN`] characters.
    #[error("Name must not exceed 64 characters")]
    NameLength,

    /// The payment URI doesn't use the `bitcoin:` scheme.
    #[error("URI must start with \"bitcoin:\"")]
    UriScheme,

    /// The URI carries an `lno` query parameter whose value isn't a BOLT 12
    /// offer.
    #[error("BOLT 12 offer must start with \"lno1\"")]
    InvalidBolt12Offer,
}

/// Check a candidate name: one to [`MAX_NAME_LEN`] characters, lowercase
/// `a-z` and `0-9` only.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`] rule.
pub fn name(input: &str) -> Result<(), ValidationError> {
    if input.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameLength);
    }
    if !NAME_PATTERN.is_match(input) {
        return Err(ValidationError::NameFormat);
    }
    Ok(())
}

/// Check a registration pair. The name rule runs first, then the URI scheme,
/// then the embedded-offer format; only the first failure is reported.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`] rule.
pub fn registration(name_input: &str, uri: &str) -> Result<(), ValidationError> {
    name(name_input)?;
    if !uri.starts_with("bitcoin:") {
        return Err(ValidationError::UriScheme);
    }
    if let Some(lno) = LNO_PARAM.captures(uri) {
        if !lno[1].starts_with("lno1") {
            return Err(ValidationError::InvalidBolt12Offer);
        }
    }
    Ok(())
}
