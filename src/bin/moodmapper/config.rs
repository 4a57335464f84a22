use std::env;

use crate::api::ClientError;

/// Resolves the service base URL. A missing or blank value is fatal: the
/// client never falls back to a default host.
pub fn base_url_from_env() -> Result<String, ClientError> {
    base_url_from(env::var("BASE_URL").ok())
}

pub fn base_url_from(value: Option<String>) -> Result<String, ClientError> {
    match value {
        Some(url) if !url.trim().is_empty() => Ok(url.trim().trim_end_matches('/').to_string()),
        _ => Err(ClientError::MissingBaseUrl),
    }
}
