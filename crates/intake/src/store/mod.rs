//! Persistence sinks. Each sink consumes finished records one at a time.

pub mod document;
pub mod sqlite;

pub use document::DocumentStore;
pub use sqlite::SqliteStore;

use intake_core::{error::ProjectionError, record::Record};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Backend failures keep their source error.
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{path}' line {line}: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("cannot encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("column {index} holds {found}, expected INTEGER or TEXT")]
    UnsupportedColumn { index: usize, found: &'static str },

    #[error("no index named '{0}'")]
    UnknownIndex(String),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

///
/// Receipt
/// where a stored record landed
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Receipt {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
}

///
/// RecordSink
///

pub trait RecordSink {
    /// Create the backing table if it does not exist yet.
    fn prepare(&mut self) -> Result<(), StoreError>;

    fn store(&mut self, record: &Record) -> Result<Receipt, StoreError>;

    /// Every stored record, in the backend's natural order.
    fn load_all(&mut self) -> Result<Vec<Record>, StoreError>;
}
