//! Configuration management for symptom-tracker.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::labels::{Labels, Language};
use crate::record::Level;
use crate::store::DEFAULT_STORAGE_KEY;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "symptom-tracker";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "records.db";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "SYMTRACK_";

/// Narrowest chart column that still fits an `MM-DD` label plus a gap.
pub const MIN_COLUMN_WIDTH: usize = 6;

/// Widest chart column accepted.
pub const MAX_COLUMN_WIDTH: usize = 20;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SYMTRACK_`, `__` between sections)
/// 2. TOML config file at `~/.config/symptom-tracker/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Entry form configuration.
    pub form: FormConfig,
    /// Display configuration.
    pub display: DisplayConfig,
    /// Chart configuration.
    pub chart: ChartConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/symptom-tracker/records.db`
    pub database_path: Option<PathBuf>,
    /// Key the record list is stored under.
    #[serde(deserialize_with = "deserialize_key")]
    pub key: String,
}

/// Entry form configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Level preselected when no level is given.
    pub default_level: u8,
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Language for labels and messages.
    pub language: Language,
}

/// Chart rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Terminal columns given to each data point.
    pub column_width: usize,
}

/// Accept numeric and boolean keys as text.
///
/// Environment values are parsed, so `SYMTRACK_STORAGE__KEY=2024` arrives as
/// an integer.
fn deserialize_key<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
        Flag(bool),
    }

    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(key) => key,
        RawKey::Signed(n) => n.to_string(),
        RawKey::Unsigned(n) => n.to_string(),
        RawKey::Float(n) => n.to_string(),
        RawKey::Flag(b) => b.to_string(),
    })
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: None, // Will be resolved to default at runtime
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_level: Level::DEFAULT.get(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            column_width: MIN_COLUMN_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage.key must not be empty".to_string(),
            });
        }

        if Level::new(self.form.default_level).is_err() {
            return Err(Error::ConfigValidation {
                message: format!(
                    "form.default_level ({}) must be between {} and {}",
                    self.form.default_level,
                    Level::MIN,
                    Level::MAX
                ),
            });
        }

        if !(MIN_COLUMN_WIDTH..=MAX_COLUMN_WIDTH).contains(&self.chart.column_width) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "chart.column_width ({}) must be between {MIN_COLUMN_WIDTH} and {MAX_COLUMN_WIDTH}",
                    self.chart.column_width
                ),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// The level a fresh entry form starts at.
    #[must_use]
    pub fn default_level(&self) -> Level {
        Level::new(self.form.default_level).unwrap_or_default()
    }

    /// Labels for the configured language.
    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        Labels::for_language(self.display.language)
    }
}
