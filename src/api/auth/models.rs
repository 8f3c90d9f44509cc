use crate::api::users::models::User;
use serde::{Deserialize, Serialize};

// Send payloads

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub username: String,
    #[serde(rename = "gmail")]
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl RegisterCredentials {
    pub fn new(username: &str, email: &str, password: &str, birthday: Option<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            birthday,
        }
    }
}

// Receive payloads

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}
