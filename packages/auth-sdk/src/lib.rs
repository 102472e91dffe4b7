pub mod error;
pub mod extractor;
pub mod models;

pub use error::{AuthError, Result};
pub use extractor::{extract_api_key, parse_api_key, API_KEY_SCHEME};
pub use models::ApiKey;
