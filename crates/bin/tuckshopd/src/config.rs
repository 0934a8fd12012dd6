//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tuckshop.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Backing-file settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Flat-file storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the JSON document file.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `tuckshop.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tuckshop.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TUCKSHOP_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("TUCKSHOP_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("TUCKSHOP_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("TUCKSHOP_DATA") {
            self.storage.path = val;
        }
        if let Ok(val) = std::env::var("TUCKSHOP_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the path to the backing JSON file.
    #[must_use]
    pub fn data_path(&self) -> &str {
        &self.storage.path
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "tuckshop.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tuckshopd=info,tuckshop=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
