use auth_sdk::{API_KEY_SCHEME, AuthError};
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub enum HttpError {
    Unauthorized(AuthError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::Unauthorized(err) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, API_KEY_SCHEME)],
                format!("Unauthorized: {err}"),
            )
                .into_response(),
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        Self::Unauthorized(err)
    }
}
