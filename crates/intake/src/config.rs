use derive_more::Display;
use intake_core::project::{Format, flat::is_identifier};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Location that selects an in-memory SQLite database.
pub const IN_MEMORY: &str = ":memory:";

const DEFAULT_TABLE: &str = "clients";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("storage location is empty")]
    EmptyLocation,

    #[error("table name '{0}' is not a SQL identifier")]
    InvalidTable(String),
}

///
/// Backend
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[display("sqlite")]
    Sqlite,
    #[display("document")]
    Document,
}

impl Backend {
    /// Projection the backend stores.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Self::Sqlite => Format::Flattened,
            Self::Document => Format::Nested,
        }
    }
}

///
/// StorageConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub backend: Backend,

    /// SQLite file, or the directory holding document tables.
    pub location: PathBuf,

    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl StorageConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.backend == Backend::Sqlite && self.location.as_os_str() == IN_MEMORY
    }
}

///
/// Config
///
/// Built once at startup and passed to whatever needs it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub storage: StorageConfig,
}

impl Config {
    #[must_use]
    pub fn new(backend: Backend, location: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            storage: StorageConfig {
                backend,
                location: location.into(),
                table: table.into(),
            },
        }
    }

    /// Read and validate a TOML config file. Relative locations resolve
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        Self::from_toml(&text, base)
    }

    pub fn from_toml(text: &str, base: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(text)?;
        config.validate()?;

        let storage = &mut config.storage;
        if !storage.is_in_memory() && storage.location.is_relative() {
            storage.location = base.join(&storage.location);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let storage = &self.storage;
        if storage.location.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLocation);
        }
        if !is_identifier(&storage.table) {
            return Err(ConfigError::InvalidTable(storage.table.clone()));
        }

        Ok(())
    }

    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.storage.backend
    }
}

///
/// TESTS
///
