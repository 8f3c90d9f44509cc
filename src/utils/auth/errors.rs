use crate::api::errors::ApiError;
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing credential")]
    MissingCredential,
    #[error("The email address is not valid")]
    InvalidEmail,
    #[error("The password must have at least {0} characters")]
    WeakPassword(usize),
    #[error("The passwords do not match")]
    PasswordMismatch,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Wrong login or password")]
    WrongLoginOrPassword,
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ApiError> for AuthError {
    fn from(e: ApiError) -> Self {
        match e.status() {
            Some(StatusCode::UNAUTHORIZED) => Self::WrongLoginOrPassword,
            Some(StatusCode::CONFLICT) => Self::UserAlreadyExists,
            _ => Self::Api(e),
        }
    }
}
