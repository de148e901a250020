use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::api::client::DEFAULT_QUANTITY;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
    pub charts: ChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the TMDB v3 API
    pub base_url: String,

    /// API Read Access Token, sent as a Bearer header
    pub auth_token: String,

    /// Account identifier for the rated-movies endpoint
    pub account_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// How many popular movies to collect when --quantity is not given
    pub popular_quantity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            fetch: FetchConfig::default(),
            charts: ChartConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            auth_token: String::new(),
            account_id: String::new(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            popular_quantity: DEFAULT_QUANTITY,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

impl ApiConfig {
    /// Fail fast when a credential field is still blank.
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.is_empty() {
            anyhow::bail!(
                "no auth token configured; set TMDB_AUTH_TOKEN or add it to the config file"
            );
        }
        if self.account_id.is_empty() {
            anyhow::bail!(
                "no account id configured; set TMDB_ACCOUNT_ID or add it to the config file"
            );
        }
        Ok(())
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            default_config
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("tmdb-cli").join("config.toml"))
    }

    /// Credentials may live in the environment instead of on disk.
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("TMDB_AUTH_TOKEN") {
            self.api.auth_token = token;
        }
        if let Ok(account) = std::env::var("TMDB_ACCOUNT_ID") {
            self.api.account_id = account;
        }
        if let Ok(base_url) = std::env::var("TMDB_BASE_URL") {
            self.api.base_url = base_url;
        }
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# TMDB CLI Configuration File
# Location: ~/.config/tmdb-cli/config.toml (Linux/macOS)
#           %APPDATA%\tmdb-cli\config.toml (Windows)

[api]
# Base URL of the TMDB v3 API
base_url = "https://api.themoviedb.org/3"

# API Read Access Token (the long Bearer token, not the short API key).
# The TMDB_AUTH_TOKEN environment variable overrides this value.
auth_token = ""

# Account id for the rated-movies endpoint.
# The TMDB_ACCOUNT_ID environment variable overrides this value.
account_id = ""

[fetch]
# How many popular movies to collect when --quantity is not given
popular_quantity = 20

[charts]
# Chart dimensions in pixels
width = 1024
height = 768
"#
        .to_string()
    }

    /// Initialize config with a setup wizard
    pub fn init_wizard() -> Result<Self> {
        println!("TMDB CLI Configuration Setup");
        println!("============================");

        print!("API Read Access Token (leave blank to rely on TMDB_AUTH_TOKEN): ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        let mut config = Config::default();
        config.api.auth_token = input.trim().to_string();

        print!("Account id (leave blank to rely on TMDB_ACCOUNT_ID): ");
        std::io::Write::flush(&mut std::io::stdout())?;
        input.clear();
        std::io::stdin().read_line(&mut input)?;
        config.api.account_id = input.trim().to_string();

        config.save()?;

        println!("\nConfiguration saved to: {:?}", Config::get_config_path()?);
        println!("You can edit this file directly to customize further.");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.themoviedb.org/3");
        assert!(config.api.auth_token.is_empty());
        assert_eq!(config.fetch.popular_quantity, 20);
        assert_eq!(config.charts.width, 1024);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.api.base_url, parsed.api.base_url);
        assert_eq!(config.fetch.popular_quantity, parsed.fetch.popular_quantity);
    }

    #[test]
    fn test_commented_template_matches_defaults() {
        let template = Config::create_default_with_comments();
        let parsed: Config = toml::from_str(&template).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.api.base_url, defaults.api.base_url);
        assert_eq!(parsed.fetch.popular_quantity, defaults.fetch.popular_quantity);
        assert_eq!(parsed.charts.height, defaults.charts.height);
    }

    #[test]
    fn test_partial_file_fills_missing_sections() {
        let parsed: Config = toml::from_str("[api]\nauth_token = \"t0ken\"\n").unwrap();
        assert_eq!(parsed.api.auth_token, "t0ken");
        assert_eq!(parsed.api.base_url, "https://api.themoviedb.org/3");
        assert_eq!(parsed.fetch.popular_quantity, 20);
    }

    #[test]
    fn test_validate_requires_credentials() {
        let mut api = ApiConfig::default();
        assert!(api.validate().is_err());

        api.auth_token = "t0ken".to_string();
        assert!(api.validate().is_err());

        api.account_id = "12345".to_string();
        assert!(api.validate().is_ok());
    }
}
