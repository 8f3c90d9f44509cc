use crate::api::errors::ApiError;
use crate::validation::ValidateContentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Not Found")]
    NotFound,
    #[error("The event has no server id")]
    MissingId,
    #[error("The event was updated, but syncing its participants ran into a problem")]
    RosterSync,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ValidateContentError> for EventError {
    fn from(e: ValidateContentError) -> Self {
        match e {
            ValidateContentError::Expected(content) => Self::InvalidInput(content),
            ValidateContentError::Unexpected(e) => Self::Unexpected(e),
        }
    }
}
