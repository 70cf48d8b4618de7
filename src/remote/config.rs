//! Configuration handling for the ticket service endpoint.
//!
//! Configuration is stored in `.vialis/config.yaml` and includes:
//! - The ticket service base URL
//! - An optional bearer token sent with every request

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::CONFIG_DIR;

/// Base URL assumed when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ticket service settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,
}

/// Ticket service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the ticket service
    pub base_url: String,
    /// Bearer token, if the deployment requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        // Ensure .vialis directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the ticket service base URL from the environment or config,
    /// falling back to the local default.
    pub fn base_url(&self) -> String {
        // First check environment variable
        if let Ok(url) = env::var("VIALIS_API_URL")
            && !url.is_empty()
        {
            return url;
        }

        // Fall back to config file
        self.api
            .as_ref()
            .map(|a| a.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get the request token from the environment or config
    pub fn token(&self) -> Option<String> {
        // First check environment variable
        if let Ok(token) = env::var("VIALIS_API_TOKEN")
            && !token.is_empty()
        {
            return Some(token);
        }

        // Fall back to config file
        self.api.as_ref().and_then(|a| a.token.clone())
    }

    /// Set the ticket service base URL
    pub fn set_base_url(&mut self, base_url: String) {
        match &mut self.api {
            Some(api) => api.base_url = base_url,
            None => {
                self.api = Some(ApiConfig {
                    base_url,
                    token: None,
                });
            }
        }
    }

    /// Set the request token
    pub fn set_token(&mut self, token: String) {
        match &mut self.api {
            Some(api) => api.token = Some(token),
            None => {
                self.api = Some(ApiConfig {
                    base_url: DEFAULT_BASE_URL.to_string(),
                    token: Some(token),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api.is_none());
    }

    #[test]
    #[serial]
    fn test_base_url_falls_back_to_default() {
        unsafe { env::remove_var("VIALIS_API_URL") };
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_base_url_env_wins_over_config() {
        let mut config = Config::default();
        config.set_base_url("http://config.example".to_string());

        unsafe { env::set_var("VIALIS_API_URL", "http://env.example") };
        assert_eq!(config.base_url(), "http://env.example");
        unsafe { env::remove_var("VIALIS_API_URL") };

        assert_eq!(config.base_url(), "http://config.example");
    }

    #[test]
    #[serial]
    fn test_token_from_config() {
        unsafe { env::remove_var("VIALIS_API_TOKEN") };
        let mut config = Config::default();
        assert!(config.token().is_none());

        config.set_token("abc123".to_string());
        assert_eq!(config.token(), Some("abc123".to_string()));
        // Setting a token alone must not lose the default base URL
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_base_url("http://tickets.example".to_string());
        config.set_token("abc123".to_string());

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        let api = parsed.api.unwrap();
        assert_eq!(api.base_url, "http://tickets.example");
        assert_eq!(api.token, Some("abc123".to_string()));
    }
}
