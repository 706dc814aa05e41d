//! Configuration for the search agent
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables (a `.env` file is honored), then CLI flags applied
//! by the binary.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8787
//! log_level = "debug"
//!
//! [search]
//! endpoint = "https://api.search.brave.com/res/v1/web/search"
//! ```
//!
//! The API key is normally supplied through `BRAVE_API_KEY` rather than the
//! file. A missing key is not a configuration error; the tool reports it
//! to the caller instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default Brave Search web endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Environment variable holding the Brave Search subscription token.
pub const API_KEY_ENV: &str = "BRAVE_API_KEY";

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Search provider settings
    #[serde(default)]
    pub search: SearchConfig,
}

// ============= Server Configuration =============

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ============= Search Configuration =============

/// Search provider settings, resolved before the tool is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Brave Search subscription token
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Web search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
        }
    }
}

impl SearchConfig {
    /// Config with the given key and the default endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Whether a usable API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }
}

// ============= Loading =============

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    ReadError {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// An environment variable holds an unusable value
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
}

impl Config {
    /// Load configuration from `path` (if it exists) and the process
    /// environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::from_file(path)?;
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse a TOML file. A missing file yields the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override values from environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.search.api_key = Some(key);
        }
        if let Some(endpoint) = lookup("BRAVE_SEARCH_URL") {
            self.search.endpoint = endpoint;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: "PORT", value: port })?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.server.log_level = level;
        }

        Ok(())
    }
}
