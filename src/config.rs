//! Configuration management
//!
//! Settings are read from a TOML file. The file is looked up in order:
//!
//! 1. an explicit path (`--config`)
//! 2. `$GOVMATCH_CONFIG`
//! 3. `~/.config/govmatch/config.toml` (XDG standard)
//!
//! A missing default file yields built-in defaults; a missing explicit
//! file is an error.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0"
//! port = 8080
//!
//! [store]
//! data_dir = "/var/lib/govmatch"
//!
//! [matching]
//! required_matches = 3
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{DEFAULT_REQUIRED_MATCHES, MatchPolicy};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "GOVMATCH_CONFIG";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Eligibility matching settings
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Document store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `profiles.json` and `schemes.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Eligibility matching settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Criteria that must match for eligibility (1..=6)
    #[serde(default = "default_required_matches")]
    pub required_matches: usize,
}

const fn default_required_matches() -> usize {
    DEFAULT_REQUIRED_MATCHES
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            required_matches: default_required_matches(),
        }
    }
}

impl Config {
    /// Default config file location
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("govmatch").join("config.toml"))
    }

    /// Load configuration following the lookup order
    ///
    /// # Errors
    ///
    /// Returns an error if a named file is missing or any file is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::from_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load and validate a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside `1..=6` or the port is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.match_policy()?;
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Matching policy from `[matching]`
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside `1..=6`.
    pub fn match_policy(&self) -> Result<MatchPolicy, ConfigError> {
        MatchPolicy::new(self.matching.required_matches)
            .map_err(|e| ConfigError::Invalid(format!("[matching] {e}")))
    }

    /// `bind:port` string for the HTTP listener
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}
