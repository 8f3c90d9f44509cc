use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{error, warn};

const CONFIG_DIR: &str = "configuration";
const CONFIG_FILE_NAME: &str = "settings.toml";

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Deserialize, Clone)]
pub struct SettingsModel {
    pub api: Option<ApiSettings>,
    pub ui: Option<UiSettings>,
    pub session: Option<SessionSettings>,
}

impl SettingsModel {
    fn parse() -> Result<Self, ConfigError> {
        let base_path = std::env::current_dir().expect("Failed to determine the current directory");
        let config_dir = base_path.join(CONFIG_DIR);
        let settings = Config::builder()
            .add_source(config::File::from(config_dir.join(CONFIG_FILE_NAME)))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );
        settings.build()?.try_deserialize()
    }
}

#[derive(Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub ui: UiSettings,
    pub session: SessionSettings,
}

impl Settings {
    fn dev(model: SettingsModel) -> Self {
        let api = model.api.unwrap_or_else(|| {
            warn!("Using default `api` settings!");
            ApiSettings::default()
        });
        let ui = model.ui.unwrap_or_else(|| {
            warn!("Using default `ui` settings!");
            UiSettings::default()
        });
        let session = model.session.unwrap_or_else(|| {
            warn!("Using default `session` settings!");
            SessionSettings::default()
        });
        Self { api, ui, session }
    }

    fn prod() -> Self {
        Self {
            api: ApiSettings::from_env(),
            ui: UiSettings::from_env(),
            session: SessionSettings::from_env(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            ui: UiSettings::default(),
            session: SessionSettings::default(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

impl ApiSettings {
    pub fn from_env() -> Self {
        Self {
            base_url: get_env("API_BASE_URL"),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct UiSettings {
    pub page_size: usize,
}

impl UiSettings {
    pub fn from_env() -> Self {
        Self {
            page_size: try_get_env("PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct SessionSettings {
    pub file: PathBuf,
}

impl SessionSettings {
    pub fn from_env() -> Self {
        Self {
            file: PathBuf::from(get_env("SESSION_FILE")),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(".eventos-session.json"),
        }
    }
}

#[derive(Clone)]
pub enum Environment {
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "production" | "prod" | "remote" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not supported environment. Use either `local` or `production`"
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, anyhow::Error> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .map_or(Environment::Development, |env| {
            env.try_into().expect("Failed to parse APP_ENVIRONMENT.")
        });

    match environment {
        Environment::Development => {
            let res = SettingsModel::parse().map_err(|e| {
                error!("{e}\n - check {CONFIG_DIR}/{CONFIG_FILE_NAME}, reference at README.md")
            });
            if let Ok(model) = res {
                return Ok(Settings::dev(model));
            }
            let default = Settings::default();
            warn!("Using default configuration!");
            Ok(default)
        }

        Environment::Production => Ok(Settings::prod()),
    }
}

fn try_get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn get_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("Missing {name}"))
}
