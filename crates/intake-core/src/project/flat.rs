use super::{ColumnType, ColumnValue, column_type, project_column, read_column};
use crate::{error::ProjectionError, record::Record};
use intake_schema::node::Schema;
use serde::Serialize;

///
/// ColumnDefinition
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub column_type: ColumnType,
}

///
/// FlatMapper
///
/// One row per record, one column per descriptor, in declaration order.
/// Column names are the field names.
///

#[derive(Clone, Copy, Debug)]
pub struct FlatMapper {
    schema: &'static Schema,
}

impl FlatMapper {
    #[must_use]
    pub const fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    /// Ordered column definitions; needs no record.
    #[must_use]
    pub fn table_definition(&self) -> Vec<ColumnDefinition> {
        self.schema
            .all_descriptors()
            .iter()
            .map(|field| ColumnDefinition {
                name: field.name,
                column_type: column_type(field),
            })
            .collect()
    }

    pub fn create_table_sql(&self, table: &str) -> Result<String, ProjectionError> {
        check_identifier(table)?;

        let columns = self
            .table_definition()
            .iter()
            .map(|c| format!("  {} {}", c.name, c.column_type.sql()))
            .collect::<Vec<_>>()
            .join(",\n");

        Ok(format!("CREATE TABLE IF NOT EXISTS {table} (\n{columns}\n);"))
    }

    /// Parameterized insert with `?1..?N` placeholders in column order.
    pub fn insert_sql(&self, table: &str) -> Result<String, ProjectionError> {
        check_identifier(table)?;

        let fields = self.schema.all_descriptors();
        let names = fields.iter().map(|f| f.name).collect::<Vec<_>>().join(", ");
        let params = (1..=fields.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("INSERT INTO {table} ({names}) VALUES ({params})"))
    }

    /// Select every column in declaration order, oldest row first.
    pub fn select_sql(&self, table: &str) -> Result<String, ProjectionError> {
        check_identifier(table)?;

        let names = self
            .schema
            .all_descriptors()
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("SELECT {names} FROM {table} ORDER BY rowid"))
    }

    pub fn to_columns(
        &self,
        record: &Record,
    ) -> Result<Vec<(&'static str, ColumnValue)>, ProjectionError> {
        if !record.belongs_to(self.schema) {
            return Err(ProjectionError::ForeignRecord {
                expected: self.schema.name(),
                found: record.schema().name(),
            });
        }

        let columns = record
            .iter()
            .map(|(field, value)| Ok((field.name, project_column(field, value)?)))
            .collect::<Result<Vec<_>, ProjectionError>>()?;
        log::debug!(target: "intake::project", "flattened {} record into {} columns", self.schema.name(), columns.len());

        Ok(columns)
    }

    /// Rebuild a record from one row, columns in declaration order.
    pub fn from_columns(&self, columns: &[ColumnValue]) -> Result<Record, ProjectionError> {
        let fields = self.schema.all_descriptors();
        if columns.len() != fields.len() {
            return Err(ProjectionError::ColumnCount {
                expected: fields.len(),
                found: columns.len(),
            });
        }

        let values = fields
            .iter()
            .zip(columns)
            .map(|(field, column)| read_column(field, column))
            .collect::<Result<Vec<_>, _>>()?;

        Record::from_values(self.schema, values)
    }
}

/// Whether `name` can be spliced into SQL unquoted.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_identifier(name: &str) -> Result<(), ProjectionError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(ProjectionError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

///
/// TESTS
///
