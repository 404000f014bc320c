//! Connection URI parsing
//!
//! Format: `kv://[<user>:<password>@]<host>:<port>`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{KvError, Result};
use super::info::normalize_host;

static URI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^kv://(?:(\w+):(\w+)@)?([^:@/]+):(\d+)$").expect("URI pattern is valid")
});

/// Components of a parsed connection URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    /// Empty when the URI has no credentials
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

/// Parse a connection URI.
///
/// Nothing is produced on failure, so callers that apply the parts to
/// existing settings never see a partial update.
pub fn parse_connection_uri(uri: &str) -> Result<UriParts> {
    let captures = URI_PATTERN
        .captures(uri)
        .ok_or_else(|| KvError::InvalidUri(format!("{} (expected kv://<user>:<password>@<host>:<port>)", uri)))?;

    let group = |i: usize| captures.get(i).map(|m| m.as_str()).unwrap_or_default();

    let port = group(4)
        .parse::<u16>()
        .ok()
        .filter(|p| *p != 0)
        .ok_or_else(|| KvError::InvalidUri(format!("{} (port must be 1-65535)", uri)))?;

    Ok(UriParts {
        user: group(1).to_string(),
        password: group(2).to_string(),
        host: normalize_host(group(3).to_string()),
        port,
    })
}
