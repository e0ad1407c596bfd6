//! Configuration loading and typed config structures for the service.
//!
//! The configuration lives in `consultant-config.yaml` in the working
//! directory. Every field has a default, so the file is optional and any
//! subset of keys may be given.
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: 8181
//!   base_path: "/consultantlocations"
//! logging:
//!   level: "info"
//! ```

use std::path::Path;

use serde::Deserialize;

/// Default file name looked up by the server binary.
pub const DEFAULT_CONFIG_FILE: &str = "consultant-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An override environment variable held an unusable value.
    #[error("invalid value for {name}: {message}")]
    InvalidEnv {
        /// Name of the environment variable.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// A value in the config file is unusable.
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// Dotted path of the offending key.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `CONSULTANT_HOST` overrides `server.host`
    /// - `CONSULTANT_PORT` overrides `server.port`
    /// - `CONSULTANT_BASE_PATH` overrides `server.base_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML,
    /// [`ConfigError::InvalidValue`] if a value is unusable, or
    /// [`ConfigError::InvalidEnv`] if an override cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.server.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without env overrides.
    ///
    /// An empty string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidValue`] if `server.base_path` cannot be used
    /// as a route prefix.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        validate_base_path(&config.server.base_path).map_err(|message| {
            ConfigError::InvalidValue {
                field: "server.base_path",
                message,
            }
        })?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if an override cannot be parsed.
    pub fn from_env_only() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.server.apply_env_overrides()?;
        Ok(config)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix every route is mounted beneath.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl ServerSection {
    /// Override listener settings with environment variables when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `CONSULTANT_PORT` is not a
    /// valid port number or `CONSULTANT_BASE_PATH` cannot be used as a
    /// route prefix.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("CONSULTANT_HOST") {
            self.host = val;
        }
        if let Some(val) = lookup("CONSULTANT_PORT") {
            self.port = val.parse().map_err(|e| ConfigError::InvalidEnv {
                name: "CONSULTANT_PORT",
                message: format!("{val}: {e}"),
            })?;
        }
        if let Some(val) = lookup("CONSULTANT_BASE_PATH") {
            validate_base_path(&val).map_err(|message| ConfigError::InvalidEnv {
                name: "CONSULTANT_BASE_PATH",
                message,
            })?;
            self.base_path = val;
        }
        Ok(())
    }

    /// The base path in mountable form.
    ///
    /// Returns `None` when routes belong at the root (empty or `/`).
    /// Otherwise the result starts with `/` and has no trailing `/`.
    pub fn normalized_base_path(&self) -> Option<String> {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) used when `RUST_LOG`
    /// is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted log lines instead of the human format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Characters the router treats as captures or wildcards, plus those that
/// cannot appear in a request path at all.
const RESERVED_BASE_PATH_CHARS: [char; 5] = ['{', '}', '*', '?', '#'];

/// Check that `path` can be used as a literal route prefix.
fn validate_base_path(path: &str) -> Result<(), String> {
    match path.chars().find(|c| RESERVED_BASE_PATH_CHARS.contains(c)) {
        Some(c) => Err(format!("{path:?} contains reserved character {c:?}")),
        None => Ok(()),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8181
}

fn default_base_path() -> String {
    "/consultantlocations".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
