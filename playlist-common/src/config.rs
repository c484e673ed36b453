//! Bootstrap configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Command-line and environment values arrive together as [`ConfigOverrides`];
//! the binary parses both through clap.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the column-oriented playlist document
pub const DEFAULT_DATA_PATH: &str = "assets/playlist.json";

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Browser origins allowed by default (local UI dev server)
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Configuration loaded from an optional TOML file
///
/// Every field is optional; anything missing falls through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to the playlist JSON document
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Bind host
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Allowed CORS origins
    #[serde(default)]
    pub cors_origins: Option<Vec<String>>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load configuration from a TOML file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Load configuration if a path was given and the file exists
    ///
    /// A missing file is not fatal and yields defaults. A file that exists
    /// but does not parse is still an error. Runs before logging is set up,
    /// so callers report which case applied.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Values given on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Effective server configuration after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl ServerConfig {
    /// Merge overrides, TOML values and compiled defaults
    pub fn resolve(overrides: ConfigOverrides, toml: TomlConfig) -> Result<Self> {
        let data_path = overrides
            .data_path
            .or(toml.data_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let host = overrides
            .host
            .or(toml.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.trim().is_empty() {
            return Err(Error::Config("Host must not be empty".to_string()));
        }

        let port = overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let cors_origins = toml.cors_origins.unwrap_or_else(|| {
            DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
        });

        Ok(Self {
            data_path,
            host,
            port,
            cors_origins,
            log_level: toml.logging.level,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
