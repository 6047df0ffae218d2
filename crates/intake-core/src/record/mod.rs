mod assembler;
mod wire;

#[cfg(test)]
mod tests;

pub use assembler::Assembler;
pub use wire::WireKey;

use crate::{
    coerce::coerce_inbound,
    error::{CoercionError, ProjectionError},
    project::check_value,
    value::Value,
};
use intake_schema::node::{FieldDescriptor, Schema, UnknownFieldError};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt;

///
/// Applied
/// what one wire pair did to a draft
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Applied {
    Set,
    Appended,
    Skipped,
}

///
/// RecordDraft
///
/// A record under assembly. Every descriptor has a slot from the start:
/// booleans hold `false`, lists hold `[]`, everything else is absent.
///

#[derive(Clone)]
pub struct RecordDraft {
    schema: &'static Schema,
    values: Vec<Value>,
}

impl RecordDraft {
    pub(crate) fn new(schema: &'static Schema) -> Self {
        let values = schema
            .all_descriptors()
            .iter()
            .map(initial_value)
            .collect();

        Self { schema, values }
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Apply one wire pair. The value is coerced before the draft is
    /// touched, so a rejected pair leaves the draft as it was.
    pub fn apply(&mut self, key: &str, raw: Option<&str>) -> Result<Applied, CoercionError> {
        let name = match WireKey::parse(key) {
            WireKey::Bookkeeping(key) => {
                log::debug!(target: "intake::record", "skipping bookkeeping key '{key}'");
                return Ok(Applied::Skipped);
            }
            WireKey::Field { name, .. } => name,
        };

        let pos = self
            .schema
            .position(name)
            .ok_or_else(|| UnknownFieldError::new(name))?;
        let field = &self.schema.all_descriptors()[pos];
        let value = coerce_inbound(field, raw)?;

        match (&mut self.values[pos], value) {
            (Value::List(existing), Value::List(mut items)) if field.is_multiple() => {
                existing.append(&mut items);

                Ok(Applied::Appended)
            }
            (slot, value) => {
                *slot = value;

                Ok(Applied::Set)
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&Value, UnknownFieldError> {
        self.schema
            .position(name)
            .map(|pos| &self.values[pos])
            .ok_or_else(|| UnknownFieldError::new(name))
    }

    /// Freeze the draft.
    #[must_use]
    pub fn finish(self) -> Record {
        Record {
            schema: self.schema,
            values: self.values,
        }
    }
}

impl fmt::Debug for RecordDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordDraft")
            .field("schema", &self.schema.name())
            .field("values", &self.values)
            .finish()
    }
}

fn initial_value(field: &FieldDescriptor) -> Value {
    if field.kind.is_list() {
        Value::List(Vec::new())
    } else if field.kind.primitive() == intake_schema::types::Primitive::Bool {
        Value::Bool(false)
    } else {
        Value::Absent
    }
}

///
/// Record
///
/// One finished submission: a value for every descriptor of its schema, in
/// declaration order. Immutable.
///

#[derive(Clone)]
pub struct Record {
    schema: &'static Schema,
    values: Vec<Value>,
}

impl Record {
    /// Rebuild a record from stored values, checking each against its field.
    pub(crate) fn from_values(
        schema: &'static Schema,
        values: Vec<Value>,
    ) -> Result<Self, ProjectionError> {
        let fields = schema.all_descriptors();
        if values.len() != fields.len() {
            return Err(ProjectionError::ColumnCount {
                expected: fields.len(),
                found: values.len(),
            });
        }
        for (field, value) in fields.iter().zip(&values) {
            check_value(field, value)?;
        }

        Ok(Self { schema, values })
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn get(&self, name: &str) -> Result<&Value, UnknownFieldError> {
        self.schema
            .position(name)
            .map(|pos| &self.values[pos])
            .ok_or_else(|| UnknownFieldError::new(name))
    }

    /// Values in schema declaration order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> {
        self.schema.all_descriptors().iter().zip(&self.values)
    }

    /// Whether this record was assembled against `schema`.
    #[must_use]
    pub fn belongs_to(&self, schema: &Schema) -> bool {
        std::ptr::eq(self.schema, schema)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl Eq for Record {}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(field, value)| (field.name, value)))
            .finish()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name, value)?;
        }

        map.end()
    }
}
