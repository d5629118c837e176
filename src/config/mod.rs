//! # Configuration Management Module
//!
//! Loads and writes the TOML configuration shared by the wardrobe tool and
//! any host that embeds the coverage engine.
//!
//! ## Configuration Structure
//!
//! - [`ClothingRules`] - wear limits, style length and cover tables (`[clothing]`)
//! - [`LoggingConfig`] - log level and optional log file (`[logging]`)
//! - [`SeedConfig`] - where wardrobe seed files live (`[seeds]`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dirgewear::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Style limit: {:?}", config.clothing.style_limit());
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [clothing]
//! wear_style_max_length = 50
//! overall_limit = 20
//! cant_cover_with = ["jewelry"]
//!
//! [clothing.type_limits]
//! hat = 1
//! shoes = 1
//!
//! [clothing.autocover]
//! top = ["undershirt"]
//! shoes = ["socks"]
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section and key is optional; omitted values take the defaults of
//! the corresponding `Default` impl.

use anyhow::{anyhow, Result};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::fs;

pub use crate::wardrobe::ClothingRules;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedConfig {
    /// Default wardrobe seed used when a command is given no file.
    #[serde(default = "default_wardrobe_path")]
    pub wardrobe: String,
}

fn default_wardrobe_path() -> String {
    "data/seeds/wardrobe.json".to_string()
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            wardrobe: default_wardrobe_path(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub clothing: ClothingRules,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seeds: SeedConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml(&content).map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    /// A file that exists and fails to parse is still an error.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        match fs::read_to_string(path).await {
            Ok(content) => Self::from_toml(&content)
                .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file at {}; using default clothing rules", path);
                Ok(Self::default())
            }
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::ClothingType;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.clothing.style_limit(), Some(50));
        assert_eq!(config.seeds.wardrobe, "data/seeds/wardrobe.json");
    }

    #[test]
    fn test_partial_clothing_section() {
        let config = Config::from_toml(
            r#"
            [clothing]
            overall_limit = 0
            cant_cover_with = ["jewelry", "cape"]

            [clothing.type_limits]
            hat = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.clothing.overall_limit(), None);
        assert_eq!(config.clothing.type_limit(&ClothingType::Hat), Some(2));
        assert_eq!(config.clothing.type_limit(&ClothingType::Shoes), None);
        assert!(!config
            .clothing
            .can_cover_with(Some(&ClothingType::Other("cape".into()))));
        assert_eq!(config.clothing.wear_style_max_length, 50);
    }

    #[test]
    fn test_logging_level_filter() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
        logging.level = "debug".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "chatty".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
