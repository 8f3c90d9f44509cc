use crate::api::users::models::User;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::errors::AuthError;

/// One JSON-serialized user record in a file: the client-side counterpart
/// of the browser's persisted "current user". Passed into the auth flows
/// explicitly instead of living as a global.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Restores the persisted user, if any. A missing file simply means
    /// no session; a corrupt file is an error worth surfacing.
    pub fn load(&self) -> Result<Option<User>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).context("Failed to read the session file")?;
        let user = serde_json::from_str(&raw).context("Failed to parse the session file")?;
        Ok(Some(user))
    }

    pub fn save(&self, user: &User) -> Result<(), AuthError> {
        let raw = serde_json::to_string(user).context("Failed to serialize the session")?;
        fs::write(&self.path, raw).context("Failed to write the session file")?;
        debug!("Session saved for {}", user.username);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("Failed to remove the session file")?;
        }
        debug!("Session cleared");
        Ok(())
    }
}
