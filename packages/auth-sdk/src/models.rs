use std::fmt;

use http::HeaderMap;

use crate::{error::Result, extractor::extract_api_key};

const HINT_PREFIX_LEN: usize = 4;

/// Shortest key whose prefix may appear in a hint
pub const HINT_MIN_LEN: usize = 8;

/// Credential taken from an `Authorization: ApiKey <key>` header.
///
/// The key is never printed by `Debug`, so an `ApiKey` can sit inside
/// request extensions or log fields without leaking the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Extract the key from a request's headers
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        extract_api_key(headers).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short non-secret prefix for diagnostics, e.g. `my-s…`.
    /// Keys shorter than [`HINT_MIN_LEN`] characters show nothing.
    pub fn hint(&self) -> String {
        if self.0.chars().count() < HINT_MIN_LEN {
            return "…".to_string();
        }
        let prefix: String = self.0.chars().take(HINT_PREFIX_LEN).collect();
        format!("{prefix}…")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
