//! Application configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! whatever was given on the command line:
//!
//! ```toml
//! schema_path = "calculator.json"
//! output_dir = "quotes"
//! filename_prefix = "Acme"
//! format = "pdf"
//! closing_note = "Thank you for your business."
//!
//! [logging]
//! level = "info"
//! file = "quote.log"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use quote_core::export::WriterConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "quote.toml";

pub const DEFAULT_SCHEMA_FILE: &str = "calculator.json";

pub const DEFAULT_CLOSING_NOTE: &str = "Thank you for your business.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// JSON document holding the calculator schema.
    pub schema_path: PathBuf,
    /// Directory exported quotes are written to; created when missing.
    pub output_dir: PathBuf,
    /// Filename prefix for exports. Derived from the calculator name when unset.
    pub filename_prefix: Option<String>,
    /// Registered writer format used for exports.
    pub format: String,
    /// Text printed under the total of every exported quote.
    pub closing_note: String,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_FILE),
            output_dir: PathBuf::from("."),
            filename_prefix: None,
            format: WriterConfig::default().format,
            closing_note: DEFAULT_CLOSING_NOTE.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub schema_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Reads and parses the config file at `path`.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the effective configuration.
    ///
    /// An explicit path must exist and parse. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read when present and the built-in
    /// defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_file(default_path)
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn apply_overrides(
        &mut self,
        overrides: Overrides,
    ) {
        if let Some(schema_path) = overrides.schema_path {
            self.schema_path = schema_path;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
    }

    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig {
            format: self.format.trim().to_lowercase(),
        }
    }
}
