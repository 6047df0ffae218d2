use super::{check_value, read_json_leaf};
use crate::{error::ProjectionError, record::Record, value::Value};
use intake_schema::node::{Schema, Shape};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Partition key attribute of the document table.
pub const HASH_KEY: &str = "id";

/// Sort key attribute of the document table.
pub const RANGE_KEY: &str = "sort_key";

/// Joins the sort key's name parts.
pub const SORT_KEY_SEPARATOR: &str = "+";

///
/// Document
///
/// A record laid out by its schema's shape. Branch keys keep the order in
/// which the schema first declares them, and every declared leaf is present
/// whether or not a value was submitted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Document {
    Leaf(Value),
    Branch(Vec<(&'static str, Self)>),
}

impl Document {
    #[must_use]
    pub fn get(&self, path: &[&str]) -> Option<&Self> {
        let Some((head, rest)) = path.split_first() else {
            return Some(self);
        };

        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children
                .iter()
                .find(|(key, _)| key == head)
                .and_then(|(_, child)| child.get(rest)),
        }
    }

    /// Leaf value at a dotted path such as `name.first`.
    #[must_use]
    pub fn leaf(&self, dotted: &str) -> Option<&Value> {
        let path: Vec<&str> = dotted.split('.').collect();

        match self.get(&path)? {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            Self::Leaf(_) => Vec::new(),
            Self::Branch(children) => children.iter().map(|(key, _)| *key).collect(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Leaf(value) => value.to_json(),
            Self::Branch(children) => serde_json::Value::Object(
                children
                    .iter()
                    .map(|(key, child)| ((*key).to_string(), child.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(value) => value.serialize(serializer),
            Self::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, child) in children {
                    map.serialize_entry(key, child)?;
                }

                map.end()
            }
        }
    }
}

///
/// KeyAttribute
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct KeyAttribute {
    pub name: &'static str,
    pub attribute_type: &'static str,
}

impl KeyAttribute {
    const fn string(name: &'static str) -> Self {
        Self {
            name,
            attribute_type: "S",
        }
    }
}

///
/// IndexDefinition
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IndexDefinition {
    pub name: &'static str,
    pub projection: Vec<&'static str>,
}

///
/// TableDefinition
/// key schema and secondary indexes of a document table
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableDefinition {
    pub table: String,
    pub hash_key: KeyAttribute,
    pub range_key: KeyAttribute,
    pub indexes: Vec<IndexDefinition>,
}

///
/// NestedMapper
///

#[derive(Clone, Copy, Debug)]
pub struct NestedMapper {
    schema: &'static Schema,
}

impl NestedMapper {
    #[must_use]
    pub const fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    #[must_use]
    pub fn table_definition(&self, table: &str) -> TableDefinition {
        TableDefinition {
            table: table.to_string(),
            hash_key: KeyAttribute::string(HASH_KEY),
            range_key: KeyAttribute::string(RANGE_KEY),
            indexes: self
                .schema
                .indexes()
                .iter()
                .map(|index| IndexDefinition {
                    name: index.name,
                    projection: index.projection.to_vec(),
                })
                .collect(),
        }
    }

    pub fn to_document(&self, record: &Record) -> Result<Document, ProjectionError> {
        if !record.belongs_to(self.schema) {
            return Err(ProjectionError::ForeignRecord {
                expected: self.schema.name(),
                found: record.schema().name(),
            });
        }

        let doc = self.build(self.schema.shape(), record.values())?;
        log::debug!(target: "intake::project", "nested {} record into {} top-level keys", self.schema.name(), doc.keys().len());

        Ok(doc)
    }

    fn build(&self, shape: &Shape, values: &[Value]) -> Result<Document, ProjectionError> {
        match shape {
            Shape::Leaf(index) => {
                let field = &self.schema.all_descriptors()[*index];
                let value = &values[*index];
                check_value(field, value)?;

                Ok(Document::Leaf(value.clone()))
            }
            Shape::Branch(children) => children
                .iter()
                .map(|(key, child)| Ok((*key, self.build(child, values)?)))
                .collect::<Result<_, ProjectionError>>()
                .map(Document::Branch),
        }
    }

    /// Rebuild a record from a document. Every declared leaf must be present.
    pub fn from_document(&self, doc: &Document) -> Result<Record, ProjectionError> {
        let mut values = vec![Value::Absent; self.schema.len()];

        for (path, index) in self.schema.shape().leaves() {
            match doc.leaf(&path) {
                Some(value) => values[index] = value.clone(),
                None => return Err(ProjectionError::MissingPath { path }),
            }
        }

        Record::from_values(self.schema, values)
    }

    /// Rebuild a record from the document's JSON form.
    pub fn from_json(&self, json: &serde_json::Value) -> Result<Record, ProjectionError> {
        let fields = self.schema.all_descriptors();
        let mut values = vec![Value::Absent; fields.len()];

        for (path, index) in self.schema.shape().leaves() {
            let leaf = path
                .split('.')
                .try_fold(json, |node, key| node.get(key))
                .ok_or_else(|| ProjectionError::MissingPath { path: path.clone() })?;

            values[index] = read_json_leaf(&fields[index], leaf)?;
        }

        Record::from_values(self.schema, values)
    }

    /// Composite sort key: the sort key fields' text joined with `+`. Absent
    /// parts contribute an empty string.
    ///
    /// Parts are not escaped, so a `+` inside a name makes the key ambiguous:
    /// last `A+B` with first `C` and last `A` with first `B+C` both give
    /// `A+B+C+`. The key only orders documents; the hash key (`id`) is what
    /// identifies one.
    #[must_use]
    pub fn document_key(&self, record: &Record) -> String {
        self.schema
            .sort_key()
            .iter()
            .map(|name| {
                record
                    .get(name)
                    .ok()
                    .and_then(Value::scalar_text)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(SORT_KEY_SEPARATOR)
    }
}

///
/// TESTS
///
