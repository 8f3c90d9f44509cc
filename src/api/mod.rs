pub mod auth;
pub mod errors;
pub mod events;
pub mod users;

use crate::api::errors::ApiError;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Decodes a JSON response body, mapping non-2xx statuses to
/// [`ApiError::Status`] with whatever body text the server sent along.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::ParseFailed(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }
}

/// Consumes a response where only the status matters.
pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }
}

pub(crate) fn request_failed(e: reqwest::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}
