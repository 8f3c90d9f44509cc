pub mod models;

use crate::api::errors::ApiError;
use crate::api::{decode_json, request_failed};
use reqwest::Client;

use self::models::User;

/// Client for the user listing owned by the external user service.
#[derive(Clone)]
pub struct UsersApi {
    client: Client,
    base_url: String,
}

impl UsersApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let res = self
            .client
            .get(format!("{}/user", self.base_url))
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }
}
