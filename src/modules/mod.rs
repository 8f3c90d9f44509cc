pub mod http;

use crate::api::auth::AuthApi;
use crate::api::events::EventsApi;
use crate::api::users::UsersApi;
use crate::config::get_config;
use crate::utils::auth::session::SessionStore;
use crate::utils::events::EventManager;
use std::path::PathBuf;
use tracing::{error, info};

use self::http::get_http_client;

/// Everything wired up from settings: the shared HTTP client behind the
/// three API clients, the session store, and the UI defaults.
pub struct Modules {
    pub events: EventsApi,
    pub users: UsersApi,
    pub auth: AuthApi,
    pub session: SessionStore,
    pub page_size: usize,
}

impl Modules {
    pub fn load_from_settings() -> Self {
        let settings = get_config()
            .map_err(|e| error!("Failed to load settings {e:#?}"))
            .unwrap();
        info!("Settings loaded");
        info!("Loading modules");
        let modules = Self::with_base_url(
            &settings.api.base_url,
            settings.session.file,
            settings.ui.page_size,
        );
        info!("Modules loaded");
        modules
    }

    /// Test hook: point all clients at a custom base URL.
    pub fn use_custom(base_url: &str, session_file: PathBuf, page_size: usize) -> Self {
        Self::with_base_url(base_url, session_file, page_size)
    }

    fn with_base_url(base_url: &str, session_file: PathBuf, page_size: usize) -> Self {
        let client = get_http_client();
        Self {
            events: EventsApi::new(client.clone(), base_url),
            users: UsersApi::new(client.clone(), base_url),
            auth: AuthApi::new(client, base_url),
            session: SessionStore::new(session_file),
            page_size,
        }
    }

    pub fn manager(&self) -> EventManager {
        EventManager::new(self.events.clone(), self.users.clone(), self.page_size)
    }
}
