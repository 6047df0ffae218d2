use super::{Receipt, RecordSink, StoreError};
use intake_core::{
    project::{ColumnValue, FlatMapper},
    record::Record,
};
use intake_schema::node::Schema;
use rusqlite::{Connection, params_from_iter, types::Value as SqlValue};
use std::{fs, path::Path};

///
/// SqliteStore
///
/// Flattened records in one table, one column per field.
///

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    table: String,
    mapper: FlatMapper,
}

impl SqliteStore {
    /// Open (or create) the database file, creating parent directories.
    pub fn open(path: &Path, table: &str, schema: &'static Schema) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        Self::with_connection(Connection::open(path)?, table, schema)
    }

    pub fn open_in_memory(table: &str, schema: &'static Schema) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?, table, schema)
    }

    fn with_connection(
        conn: Connection,
        table: &str,
        schema: &'static Schema,
    ) -> Result<Self, StoreError> {
        let mapper = FlatMapper::new(schema);
        // reject bad table names before any statement is built
        mapper.insert_sql(table)?;

        Ok(Self {
            conn,
            table: table.to_string(),
            mapper,
        })
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn create_table_sql(&self) -> Result<String, StoreError> {
        Ok(self.mapper.create_table_sql(&self.table)?)
    }

    pub fn create_table(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(&self.create_table_sql()?)?;
        log::info!(target: "intake::store", "sqlite table '{}' ready", self.table);

        Ok(())
    }

    /// Insert one record, returning its rowid.
    pub fn insert(&self, record: &Record) -> Result<i64, StoreError> {
        let sql = self.mapper.insert_sql(&self.table)?;
        let params = self
            .mapper
            .to_columns(record)?
            .into_iter()
            .map(|(_, column)| match column {
                ColumnValue::Integer(i) => SqlValue::Integer(i),
                ColumnValue::Text(s) => SqlValue::Text(s),
            });

        self.conn.execute(&sql, params_from_iter(params))?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        let sql = self.mapper.select_sql(&self.table)?;
        let width = self.mapper.table_definition().len();

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let mut columns = Vec::with_capacity(width);
            for index in 0..width {
                columns.push(match row.get::<_, SqlValue>(index)? {
                    SqlValue::Integer(i) => ColumnValue::Integer(i),
                    SqlValue::Text(s) => ColumnValue::Text(s),
                    SqlValue::Null => return Err(unsupported(index, "NULL")),
                    SqlValue::Real(_) => return Err(unsupported(index, "REAL")),
                    SqlValue::Blob(_) => return Err(unsupported(index, "BLOB")),
                });
            }
            records.push(self.mapper.from_columns(&columns)?);
        }

        Ok(records)
    }
}

const fn unsupported(index: usize, found: &'static str) -> StoreError {
    StoreError::UnsupportedColumn { index, found }
}

impl RecordSink for SqliteStore {
    fn prepare(&mut self) -> Result<(), StoreError> {
        self.create_table()
    }

    fn store(&mut self, record: &Record) -> Result<Receipt, StoreError> {
        let rowid = self.insert(record)?;
        log::info!(target: "intake::store", "stored {} row {rowid} in '{}'", record.schema().name(), self.table);

        Ok(Receipt {
            id: rowid.to_string(),
            sort_key: None,
        })
    }

    fn load_all(&mut self) -> Result<Vec<Record>, StoreError> {
        SqliteStore::load_all(self)
    }
}

///
/// TESTS
///
