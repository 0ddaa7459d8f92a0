//! Configuration system
//!
//! Handles loading configuration from TOML files and environment variables.
//! Environment variables override file settings.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8091".to_string(),
                "http://127.0.0.1:8091".to_string(),
            ],
        }
    }
}

/// Session seed configuration
///
/// Overrides for the starting point ledger; the panel datasets themselves
/// are fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_starting_points")]
    pub starting_points: u32,

    #[serde(default = "default_day_streak")]
    pub day_streak: u32,
}

fn default_starting_points() -> u32 {
    crate::waste::STARTING_POINTS
}

fn default_day_streak() -> u32 {
    crate::waste::STARTING_STREAK
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_points: default_starting_points(),
            day_streak: default_day_streak(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("econeighbor").join("config.toml")),
            Some(PathBuf::from("/etc/econeighbor/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ECONEIGHBOR_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("ECONEIGHBOR_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(points) = std::env::var("ECONEIGHBOR_STARTING_POINTS") {
            if let Ok(p) = points.parse() {
                self.session.starting_points = p;
            }
        }
        if let Ok(streak) = std::env::var("ECONEIGHBOR_DAY_STREAK") {
            if let Ok(s) = streak.parse() {
                self.session.day_streak = s;
            }
        }

        if let Ok(level) = std::env::var("ECONEIGHBOR_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ECONEIGHBOR_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# EcoNeighbor Configuration
#
# Environment variables override these settings:
# - ECONEIGHBOR_API_HOST
# - ECONEIGHBOR_API_PORT
# - ECONEIGHBOR_STARTING_POINTS
# - ECONEIGHBOR_DAY_STREAK
# - ECONEIGHBOR_LOG_LEVEL
# - ECONEIGHBOR_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins
cors_origins = ["http://localhost:8091", "http://127.0.0.1:8091"]

[session]
# Eco points a fresh session starts with
starting_points = 175

# Day streak shown on the waste guide
day_streak = 12

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/econeighbor/econeighbor.log"
"#
    .to_string()
}
