use auth_sdk::ApiKey;
use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::HttpError;

/// Rejects requests without an `Authorization: ApiKey <key>` header and
/// makes the extracted [`ApiKey`] available to handlers as an extension.
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, HttpError> {
    let api_key = ApiKey::from_headers(request.headers()).inspect_err(|err| {
        tracing::debug!(error = %err, path = %request.uri().path(), "rejected request");
    })?;

    tracing::trace!(key_hint = %api_key.hint(), "api key extracted");
    request.extensions_mut().insert(api_key);

    Ok(next.run(request).await)
}
