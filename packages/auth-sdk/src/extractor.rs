use http::{header, HeaderMap};

use crate::error::{AuthError, Result};

/// Scheme name expected as the first token of the `Authorization` value
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from the `Authorization` header.
///
/// Header lookup is case-insensitive. When the header is repeated only the
/// first value is read.
///
/// # Errors
///
/// Returns [`AuthError::MissingHeader`] if the header is absent or empty and
/// [`AuthError::MalformedHeader`] if the value is not `ApiKey <key>`.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?;

    api_key_from_bytes(auth_header.as_bytes())
}

/// Extract the API key from a raw `Authorization` header value.
///
/// The value is split on single spaces; the first token must be exactly
/// `ApiKey` and the second token is returned. Any further tokens are
/// dropped, so `"ApiKey a b"` yields `"a"`. `"ApiKey "` yields an empty key.
pub fn parse_api_key(authorization_header: &str) -> Result<String> {
    api_key_from_bytes(authorization_header.as_bytes())
}

// Only the key token has to be UTF-8; dropped trailing tokens are never decoded.
fn api_key_from_bytes(value: &[u8]) -> Result<String> {
    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    let mut parts = value.split(|b| *b == b' ');
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(key)) if scheme == API_KEY_SCHEME.as_bytes() => {
            std::str::from_utf8(key)
                .map(str::to_string)
                .map_err(|_| AuthError::MalformedHeader)
        }
        _ => Err(AuthError::MalformedHeader),
    }
}
