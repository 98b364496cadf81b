use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Option<String>,
    pub database_url: String,
    pub database_max_connections: Option<u32>,
    pub run_migrations: Option<bool>,
    pub port: Option<u16>,
    /// Shared secret of the identity gateway, expected in `x-api-key`.
    pub api_key: String,
}

impl Settings {
    pub fn is_production(&self) -> bool {
        self.environment.as_deref() == Some("PROD")
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder();
    let settings = settings.add_source(Environment::default().try_parsing(true));
    settings.build()?.try_deserialize()
}
