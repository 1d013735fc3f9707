//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub credentials: CredentialsConfig,
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    /// Token a message must start with to be handled
    pub address: String,
}

/// API keys for the lookup services. The dictionary needs none.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CredentialsConfig {
    pub steam_token: Option<String>,
    pub giphy_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CatalogConfig {
    pub refresh_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "discorgi".to_string(),
            address: "discorgi".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 24 * 60 * 60,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

/// Credentials checked by [`Config::validate`]
#[derive(Debug, Clone)]
pub struct Credentials {
    pub steam_token: String,
    pub giphy_token: String,
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Let environment variables override loaded values
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(token) = var("STEAM_TOKEN") {
            self.credentials.steam_token = Some(token);
        }

        if let Some(token) = var("GIPHY_TOKEN") {
            self.credentials.giphy_token = Some(token);
        }

        if let Some(address) = var("DISCORGI_ADDRESS") {
            self.bot.address = address;
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check the values needed to run and return the credentials
    pub fn validate(&self) -> Result<Credentials, ConfigError> {
        if self.bot.address.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.address".into()));
        }
        if self.bot.address.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "bot.address must be a single word, got {:?}",
                self.bot.address
            )));
        }
        if self.catalog.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue("catalog.refresh-interval-secs must be positive".into()));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("http.timeout-secs must be positive".into()));
        }

        let steam_token = non_empty(&self.credentials.steam_token)
            .ok_or_else(|| ConfigError::MissingField("credentials.steam-token".into()))?;
        let giphy_token = non_empty(&self.credentials.giphy_token)
            .ok_or_else(|| ConfigError::MissingField("credentials.giphy-token".into()))?;

        Ok(Credentials {
            steam_token,
            giphy_token,
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.catalog.refresh_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
