//! ## Crate layout
//! - `config`: TOML storage configuration, loaded once and passed in.
//! - `error`: public error with a stable kind + origin taxonomy.
//! - `form`: presentation layout of the intake form.
//! - `store`: SQLite (flattened) and document (nested) record sinks.
//! - `submission`: JSON submissions flattened into wire pairs.
//!
//! [`Intake`] ties them together: wire pairs in, one stored record out.

pub mod config;
pub mod error;
pub mod form;
pub mod store;
pub mod submission;

pub use error::Error;
pub use intake_core as core;
pub use intake_schema as schema;

use crate::{
    config::{Backend, Config},
    form::FormLayout,
    store::{DocumentStore, Receipt, RecordSink, SqliteStore},
};
use intake_core::{
    project::{FlatMapper, Format, NestedMapper},
    record::{Assembler, Record},
};
use intake_schema::node::Schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Intake,
        config::{Backend, Config},
        error::{Error, ErrorKind, ErrorOrigin},
        form::FormLayout,
        store::{Receipt, RecordSink},
    };
    pub use intake_core::prelude::*;
}

///
/// Intake
///
/// One configured intake service: a schema, an assembler, and the sink the
/// configured backend selects.
///

pub struct Intake {
    schema: &'static Schema,
    assembler: Assembler,
    backend: Backend,
    table: String,
    sink: Box<dyn RecordSink>,
}

impl Intake {
    /// Open the client intake described by `config`, creating its table if
    /// needed.
    pub fn open(config: &Config) -> Result<Self, Error> {
        Self::with_schema(intake_client_schema::schema()?, config)
    }

    pub fn with_schema(schema: &'static Schema, config: &Config) -> Result<Self, Error> {
        config.validate()?;

        let storage = &config.storage;
        let mut sink: Box<dyn RecordSink> = match storage.backend {
            Backend::Sqlite if storage.is_in_memory() => {
                Box::new(SqliteStore::open_in_memory(&storage.table, schema)?)
            }
            Backend::Sqlite => Box::new(SqliteStore::open(&storage.location, &storage.table, schema)?),
            Backend::Document => {
                Box::new(DocumentStore::open(&storage.location, &storage.table, schema)?)
            }
        };
        sink.prepare()?;
        log::info!(
            target: "intake",
            "{} intake open: {} backend ({} records) at {}",
            schema.name(),
            storage.backend,
            storage.backend.format(),
            storage.location.display()
        );

        Ok(Self {
            schema,
            assembler: Assembler::new(schema),
            backend: storage.backend,
            table: storage.table.clone(),
            sink,
        })
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Storage projection the configured backend uses.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.backend.format()
    }

    #[must_use]
    pub fn form(&self) -> FormLayout {
        FormLayout::build(self.schema)
    }

    /// Storage definition for the configured backend: `CREATE TABLE` SQL for
    /// SQLite, the key schema and indexes as JSON for documents.
    pub fn storage_definition(&self) -> Result<String, Error> {
        match self.format() {
            Format::Flattened => Ok(FlatMapper::new(self.schema).create_table_sql(&self.table)?),
            Format::Nested => {
                let def = NestedMapper::new(self.schema).table_definition(&self.table);

                serde_json::to_string_pretty(&def).map_err(|err| {
                    Error::from(store::StoreError::Encode(err))
                })
            }
        }
    }

    /// Coerce and assemble one submission without storing it.
    pub fn assemble<I, K, V>(&self, pairs: I) -> Result<Record, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Ok(self.assembler.assemble(pairs)?)
    }

    /// Assemble one submission and hand it to the sink.
    pub fn submit<I, K, V>(&mut self, pairs: I) -> Result<Receipt, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let record = self.assemble(pairs)?;

        Ok(self.sink.store(&record)?)
    }

    pub fn submit_json(&mut self, json: &serde_json::Value) -> Result<Receipt, Error> {
        let pairs = submission::pairs_from_json(json)?;

        self.submit(pairs)
    }

    /// Every stored record.
    pub fn records(&mut self) -> Result<Vec<Record>, Error> {
        Ok(self.sink.load_all()?)
    }
}
