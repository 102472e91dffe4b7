use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    MissingHeader,

    #[error("malformed authorization header")]
    MalformedHeader,
}

pub type Result<T> = std::result::Result<T, AuthError>;
