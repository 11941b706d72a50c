//! Server and dataset configuration.
//!
//! Configuration is read from an optional `grundatlas.toml` file, with
//! every field carrying a default and an environment-variable override so
//! the server also runs with no config file at all.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind host (default: 0.0.0.0).
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port (default: 8080).
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Path to the rate dataset JSON file.
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> String {
    "data/grundsteuer-rates.json".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default locations, falling back to
    /// built-in defaults when no file is found.
    ///
    /// Searches `grundatlas.toml` in the current directory, then the
    /// parent directory. A file that exists but fails to parse is an
    /// error; a missing file is not.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("grundatlas.toml"),
            PathBuf::from("../grundatlas.toml"),
        ];
        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Apply environment-variable overrides.
    ///
    /// - `GRUNDATLAS_HOST`: bind host
    /// - `GRUNDATLAS_PORT`: bind port (ignored when not a valid port)
    /// - `GRUNDATLAS_DATA`: dataset file path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("GRUNDATLAS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("GRUNDATLAS_PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(path) = env::var("GRUNDATLAS_DATA") {
            self.dataset.path = path;
        }
    }

    /// Load configuration from file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
