pub mod models;

use crate::api::errors::ApiError;
use crate::api::{decode_json, expect_success, request_failed};
use reqwest::Client;

use self::models::{AuthResponse, LoginCredentials, RegisterCredentials};

/// Client for the `/user/auth` endpoints.
#[derive(Clone)]
pub struct AuthApi {
    client: Client,
    base_url: String,
}

impl AuthApi {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/user/auth/{suffix}", self.base_url)
    }

    pub async fn login(&self, credentials: LoginCredentials) -> Result<AuthResponse, ApiError> {
        let res = self
            .client
            .post(self.url("login"))
            .json(&credentials)
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    pub async fn register(
        &self,
        credentials: RegisterCredentials,
    ) -> Result<AuthResponse, ApiError> {
        let res = self
            .client
            .post(self.url("register"))
            .json(&credentials)
            .send()
            .await
            .map_err(request_failed)?;
        decode_json(res).await
    }

    /// Development helper, mirrors the seed endpoint of the API.
    pub async fn create_admin(&self) -> Result<(), ApiError> {
        let res = self
            .client
            .post(self.url("create-admin"))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(request_failed)?;
        expect_success(res).await
    }
}
