use crate::api::errors::ApiError;
use crate::utils::auth::errors::AuthError;
use crate::utils::events::errors::EventError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    EventError(#[from] EventError),
    #[error(transparent)]
    ApiError(#[from] ApiError),
}

/// Attaches a default `anyhow` context where the precise failure is
/// uninteresting to the caller.
pub trait DefaultContext<T> {
    fn dc(self) -> Result<T, anyhow::Error>;
}

impl<T> DefaultContext<T> for Option<T> {
    fn dc(self) -> Result<T, anyhow::Error> {
        self.ok_or_else(|| anyhow::anyhow!("Missing value"))
    }
}

impl<T, E> DefaultContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn dc(self) -> Result<T, anyhow::Error> {
        self.map_err(anyhow::Error::from)
    }
}
