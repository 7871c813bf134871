//! Backend configuration, read from an optional TOML file and the environment.
//!
//! Environment variables use the `HERALD_` prefix and `__` between nested
//! keys, e.g. `HERALD_SERVER__PORT=9000`.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_PATH_VAR: &str = "HERALD_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "herald.toml";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        let config_path =
            env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut builder = config::Config::builder();
        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("HERALD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, SettingsError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}
