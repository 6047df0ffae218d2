//! Projection between typed values and the two storage formats.
//!
//! Flattened storage is one integer or text column per field. Nested
//! storage keeps the typed value and places it in the document by path.

pub mod flat;
pub mod nested;


pub use flat::{ColumnDefinition, FlatMapper};
pub use nested::{Document, IndexDefinition, KeyAttribute, NestedMapper, TableDefinition};

use crate::{
    coerce::coerce_scalar,
    error::ProjectionError,
    value::{Value, date},
};
use derive_more::Display;
use intake_schema::{
    node::{EnumOption, EnumValue, FieldDescriptor},
    types::{Kind, Primitive},
};
use serde::Serialize;

/// Separator between list elements inside one flattened text column.
pub const LIST_SEPARATOR: &str = "\n";

///
/// Format
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Format {
    #[display("flattened")]
    Flattened,
    #[display("nested")]
    Nested,
}

///
/// ColumnType
/// SQL storage class of one flattened column
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ColumnType {
    #[display("INTEGER")]
    Integer,
    #[display("TEXT")]
    Text,
}

impl ColumnType {
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
        }
    }
}

///
/// ColumnValue
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnValue {
    Integer(i64),
    Text(String),
}

impl ColumnValue {
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        match self {
            Self::Integer(_) => ColumnType::Integer,
            Self::Text(_) => ColumnType::Text,
        }
    }
}

///
/// StorageValue
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageValue {
    Column(ColumnValue),
    Leaf(Value),
}

/// Column type for a field. Text and every list are TEXT; all other
/// scalars are INTEGER.
#[must_use]
pub const fn column_type(field: &FieldDescriptor) -> ColumnType {
    match field.kind {
        Kind::Scalar(Primitive::Text) | Kind::List(_) => ColumnType::Text,
        Kind::Scalar(_) => ColumnType::Integer,
    }
}

/// Project one typed value into `format`.
pub fn project_outbound(
    field: &'static FieldDescriptor,
    value: &Value,
    format: Format,
) -> Result<StorageValue, ProjectionError> {
    match format {
        Format::Flattened => project_column(field, value).map(StorageValue::Column),
        Format::Nested => {
            check_value(field, value)?;

            Ok(StorageValue::Leaf(value.clone()))
        }
    }
}

/// Flattened encoding of one value.
pub fn project_column(
    field: &'static FieldDescriptor,
    value: &Value,
) -> Result<ColumnValue, ProjectionError> {
    check_value(field, value)?;

    let column = match (field.kind, value) {
        (Kind::List(_), Value::List(items)) => ColumnValue::Text(join_list(field, items)?),
        (Kind::Scalar(Primitive::Text), Value::Absent) => ColumnValue::Text(String::new()),
        (_, Value::Text(s)) => ColumnValue::Text(s.clone()),
        (_, Value::Absent) => ColumnValue::Integer(0),
        (_, Value::Bool(b)) => ColumnValue::Integer(i64::from(*b)),
        (_, Value::Int(i)) => ColumnValue::Integer(*i),
        (_, Value::Date(d)) => ColumnValue::Integer(date::to_ordinal(*d)),
        (_, Value::Enum(option)) => ColumnValue::Integer(enum_integer(field, option)?),
        (_, Value::List(_)) => return Err(mismatch(field, value)),
    };

    Ok(column)
}

/// Join list items into one text column. An item that is empty or holds the
/// separator would not split back into itself, so it is refused before
/// anything is written.
fn join_list(field: &'static FieldDescriptor, items: &[Value]) -> Result<String, ProjectionError> {
    let mut parts = Vec::with_capacity(items.len());

    for item in items {
        let Some(text) = item.scalar_text() else {
            return Err(mismatch(field, item));
        };
        if text.is_empty() || text.contains(LIST_SEPARATOR) {
            return Err(ProjectionError::UnstorableListItem {
                field: field.name,
                item: text,
            });
        }
        parts.push(text);
    }

    Ok(parts.join(LIST_SEPARATOR))
}

/// Integer-valued options store their value; text-valued options store
/// their 1-based declaration ordinal.
fn enum_integer(field: &'static FieldDescriptor, option: &EnumOption) -> Result<i64, ProjectionError> {
    match option.value {
        EnumValue::Int(v) => Ok(v),
        EnumValue::Text(_) => field
            .ordinal_of(option)
            .and_then(|n| i64::try_from(n).ok())
            .ok_or_else(|| undeclared(field, option)),
    }
}

/// Decode one flattened column back into a typed value.
///
/// Lossy where the encoding is: `0` is absent for dates and enums, empty
/// text is absent, and an absent integer comes back as `Int(0)`.
pub fn read_column(
    field: &'static FieldDescriptor,
    column: &ColumnValue,
) -> Result<Value, ProjectionError> {
    let expected = column_type(field);
    if column.column_type() != expected {
        return Err(ProjectionError::ColumnType {
            field: field.name,
            expected,
        });
    }

    let value = match (field.kind, column) {
        (Kind::List(p), ColumnValue::Text(s)) => {
            let items = if s.is_empty() {
                Vec::new()
            } else {
                s.split(LIST_SEPARATOR)
                    .map(|part| read_list_item(field, p, part))
                    .collect::<Result<_, _>>()?
            };

            Value::List(items)
        }
        (_, ColumnValue::Text(s)) if s.is_empty() => Value::Absent,
        (_, ColumnValue::Text(s)) => Value::Text(s.clone()),

        (Kind::Scalar(Primitive::Bool), ColumnValue::Integer(i)) => Value::Bool(*i != 0),
        (Kind::Scalar(Primitive::Date | Primitive::Enum), ColumnValue::Integer(0)) => Value::Absent,
        (Kind::Scalar(Primitive::Date), ColumnValue::Integer(i)) => date::from_ordinal(*i)
            .map(Value::Date)
            .ok_or_else(|| malformed(field, i))?,
        (Kind::Scalar(Primitive::Enum), ColumnValue::Integer(i)) => {
            Value::Enum(enum_from_integer(field, *i).ok_or_else(|| malformed(field, i))?)
        }
        (_, ColumnValue::Integer(i)) => Value::Int(*i),
    };

    Ok(value)
}

fn enum_from_integer(field: &FieldDescriptor, stored: i64) -> Option<&'static EnumOption> {
    match field.options.first()?.value {
        EnumValue::Int(_) => field.option_for_value(EnumValue::Int(stored)),
        EnumValue::Text(_) => field.option_at_ordinal(stored),
    }
}

fn read_list_item(
    field: &'static FieldDescriptor,
    primitive: Primitive,
    part: &str,
) -> Result<Value, ProjectionError> {
    let value = match (primitive, part) {
        (Primitive::Bool, "1") => Value::Bool(true),
        (Primitive::Bool, "0") => Value::Bool(false),
        (Primitive::Bool, _) => return Err(malformed(field, part)),
        _ => coerce_scalar(field, primitive, part).map_err(|_| malformed(field, part))?,
    };

    if value.is_absent() {
        return Err(malformed(field, part));
    }

    Ok(value)
}

/// Decode one document leaf from JSON. `null` is absent for scalars and
/// the empty sequence for lists.
pub fn read_json_leaf(
    field: &'static FieldDescriptor,
    json: &serde_json::Value,
) -> Result<Value, ProjectionError> {
    use serde_json::Value as Json;

    match (field.kind, json) {
        (Kind::Scalar(_), Json::Null) => Ok(Value::Absent),
        (Kind::List(_), Json::Null) => Ok(Value::List(Vec::new())),
        (Kind::Scalar(p), json) => read_json_scalar(field, p, json),
        (Kind::List(p), Json::Array(items)) => items
            .iter()
            .map(|item| match item {
                Json::Null => Err(malformed(field, item)),
                item => read_json_scalar(field, p, item),
            })
            .collect::<Result<_, _>>()
            .map(Value::List),
        (Kind::List(_), json) => Err(malformed(field, json)),
    }
}

fn read_json_scalar(
    field: &'static FieldDescriptor,
    primitive: Primitive,
    json: &serde_json::Value,
) -> Result<Value, ProjectionError> {
    use serde_json::Value as Json;

    let value = match (primitive, json) {
        (Primitive::Bool, Json::Bool(b)) => Some(Value::Bool(*b)),
        (Primitive::Int, Json::Number(n)) => n.as_i64().map(Value::Int),
        (Primitive::Text, Json::String(s)) => Some(Value::Text(s.clone())),
        (Primitive::Date, Json::String(s)) => date::parse_iso(s).map(Value::Date),
        (Primitive::Enum, Json::Number(n)) => n
            .as_i64()
            .and_then(|v| field.option_for_value(EnumValue::Int(v)))
            .map(Value::Enum),
        (Primitive::Enum, Json::String(s)) => field
            .options
            .iter()
            .find(|o| matches!(o.value, EnumValue::Text(v) if v == s))
            .map(Value::Enum),
        _ => None,
    };

    value.ok_or_else(|| malformed(field, json))
}

/// Shape check shared by both formats: the value must conform to the
/// field's kind and every enum must be one of the field's own options.
pub(crate) fn check_value(field: &'static FieldDescriptor, value: &Value) -> Result<(), ProjectionError> {
    if !value.conforms_to(field.kind) {
        return Err(mismatch(field, value));
    }

    let options: &[Value] = match value {
        Value::List(items) => items,
        other => std::slice::from_ref(other),
    };
    for item in options {
        if let Value::Enum(option) = item
            && field.option_for_value(option.value).is_none()
        {
            return Err(undeclared(field, option));
        }
    }

    Ok(())
}

//
// error helpers
//

const fn mismatch(field: &'static FieldDescriptor, value: &Value) -> ProjectionError {
    ProjectionError::KindMismatch {
        field: field.name,
        expected: field.kind,
        found: value.variant_name(),
    }
}

fn undeclared(field: &'static FieldDescriptor, option: &EnumOption) -> ProjectionError {
    ProjectionError::UndeclaredOption {
        field: field.name,
        value: option.value.to_string(),
    }
}

fn malformed(field: &'static FieldDescriptor, stored: impl ToString) -> ProjectionError {
    ProjectionError::Malformed {
        field: field.name,
        stored: stored.to_string(),
    }
}
