use auth_sdk::ApiKey;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    pub key_hint: String,
}

pub async fn healthz() -> &'static str {
    "Pong"
}

pub async fn whoami(Extension(api_key): Extension<ApiKey>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        authenticated: true,
        key_hint: api_key.hint(),
    })
}
