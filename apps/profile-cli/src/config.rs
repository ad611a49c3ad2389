//! CLI configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use local_storage::FileSlotStore;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the storage backend.
pub const ENV_STORAGE: &str = "WORKERCONNECT_STORAGE";
/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "WORKERCONNECT_DATA_DIR";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "WORKERCONNECT_LOG_LEVEL";

/// Where the persisted session slot lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per slot under the data directory
    File,
    /// OS credential store
    Keyring,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Keyring => "keyring",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "keyring" => Ok(Self::Keyring),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_STORAGE,
                value: s.to_string(),
            }),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage backend for the session slot
    #[serde(default = "default_storage")]
    pub storage: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage() -> StorageBackend {
    StorageBackend::File
}

fn default_data_dir() -> PathBuf {
    FileSlotStore::default_root().unwrap_or_else(|| PathBuf::from(".workerconnect"))
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let file = Self::find_config_file();
        Self::resolve(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds the configuration from a config file and an environment lookup.
    /// Environment values take precedence over the file.
    pub fn resolve(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(storage) = env(ENV_STORAGE) {
            config.storage = storage.parse()?;
        }

        if let Some(dir) = env(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(level) = env(ENV_LOG_LEVEL) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Parses a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut locations = vec![PathBuf::from("workerconnect.toml")];
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("workerconnect").join("config.toml"));
        }

        locations.into_iter().find(|p| p.exists())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
