use super::{Receipt, RecordSink, StoreError};
use intake_core::{
    error::ProjectionError,
    project::{Document, NestedMapper, TableDefinition, flat::is_identifier},
    record::Record,
    value::Value,
};
use intake_schema::node::Schema;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use ulid::Ulid;

///
/// StoredDocument
/// one item of a document table
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub sort_key: String,
    pub record: Record,
}

#[derive(Serialize)]
struct ItemRef<'a> {
    id: &'a str,
    sort_key: &'a str,
    document: &'a Document,
}

#[derive(Deserialize)]
struct Item {
    id: String,
    sort_key: String,
    document: serde_json::Value,
}

///
/// DocumentStore
///
/// A key/document table kept as JSON lines under `<dir>/<table>.jsonl`.
/// Items are keyed by a generated ULID and the record's composite sort key.
///

#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    table: String,
    mapper: NestedMapper,
    schema: &'static Schema,
}

impl DocumentStore {
    pub fn open(dir: &Path, table: &str, schema: &'static Schema) -> Result<Self, StoreError> {
        if !is_identifier(table) {
            return Err(ProjectionError::InvalidIdentifier {
                name: table.to_string(),
            }
            .into());
        }

        Ok(Self {
            path: dir.join(format!("{table}.jsonl")),
            table: table.to_string(),
            mapper: NestedMapper::new(schema),
            schema,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn table_definition(&self) -> TableDefinition {
        self.mapper.table_definition(&self.table)
    }

    pub fn create_table(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| self.io(source))?;
        }
        self.open_for_append()?;
        log::info!(target: "intake::store", "document table '{}' ready at {}", self.table, self.path.display());

        Ok(())
    }

    pub fn insert(&self, record: &Record) -> Result<Receipt, StoreError> {
        let document = self.mapper.to_document(record)?;
        let id = Ulid::new().to_string();
        let sort_key = self.mapper.document_key(record);

        let line = serde_json::to_string(&ItemRef {
            id: &id,
            sort_key: &sort_key,
            document: &document,
        })
        .map_err(StoreError::Encode)?;

        let mut file = self.open_for_append()?;
        writeln!(file, "{line}").map_err(|source| self.io(source))?;

        Ok(Receipt {
            id,
            sort_key: Some(sort_key),
        })
    }

    /// Every item, ordered by sort key then id.
    pub fn load_all(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io(source)),
        };

        let mut items = Vec::new();
        for (n, line) in text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let item: Item = serde_json::from_str(line).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                line: n + 1,
                source,
            })?;

            items.push(StoredDocument {
                record: self.mapper.from_json(&item.document)?,
                id: item.id,
                sort_key: item.sort_key,
            });
        }
        items.sort_by(|a, b| (&a.sort_key, &a.id).cmp(&(&b.sort_key, &b.id)));

        Ok(items)
    }

    /// Items whose index projection starts with `prefix`, compared as text.
    pub fn find_by_index(
        &self,
        index: &str,
        prefix: &[&str],
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let def = self
            .schema
            .indexes()
            .iter()
            .find(|i| i.name == index)
            .ok_or_else(|| StoreError::UnknownIndex(index.to_string()))?;

        let mut found = Vec::new();
        for item in self.load_all()? {
            let doc = self.mapper.to_document(&item.record)?;
            let matches = def
                .projection
                .iter()
                .zip(prefix)
                .all(|(path, want)| doc.leaf(path).and_then(Value::scalar_text).as_deref() == Some(*want));

            if matches {
                found.push(item);
            }
        }

        Ok(found)
    }

    fn open_for_append(&self) -> Result<fs::File, StoreError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io(source))
    }

    fn io(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordSink for DocumentStore {
    fn prepare(&mut self) -> Result<(), StoreError> {
        self.create_table()
    }

    fn store(&mut self, record: &Record) -> Result<Receipt, StoreError> {
        let receipt = self.insert(record)?;
        log::info!(target: "intake::store", "stored {} item {} in '{}'", record.schema().name(), receipt.id, self.table);

        Ok(receipt)
    }

    fn load_all(&mut self) -> Result<Vec<Record>, StoreError> {
        Ok(DocumentStore::load_all(self)?
            .into_iter()
            .map(|item| item.record)
            .collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::record::Assembler;
    use tempfile::TempDir;

    fn schema() -> &'static Schema {
        intake_client_schema::schema().expect("client schema")
    }

    fn client(first: &str, last: &str) -> Record {
        Assembler::new(schema())
            .assemble([("name_first", first), ("name_last", last), ("household_size", "3")])
            .expect("valid")
    }

    #[test]
    fn missing_table_loads_empty() {
        let dir = TempDir::new().expect("temp dir");
        let store = DocumentStore::open(dir.path(), "clients", schema()).expect("open");

        assert_eq!(store.load_all().expect("load"), vec![]);
    }

    #[test]
    fn items_round_trip_in_sort_key_order() {
        let dir = TempDir::new().expect("temp dir");
        let store = DocumentStore::open(dir.path(), "clients", schema()).expect("open");
        store.create_table().expect("create");

        let turing = store.insert(&client("Alan", "Turing")).expect("insert");
        store.insert(&client("Ada", "Lovelace")).expect("insert");

        assert_eq!(turing.sort_key.as_deref(), Some("Turing+Alan+"));
        assert_eq!(turing.id.len(), 26);

        let items = store.load_all().expect("load");
        let keys: Vec<_> = items.iter().map(|i| i.sort_key.as_str()).collect();
        assert_eq!(keys, vec!["Lovelace+Ada+", "Turing+Alan+"]);
        assert_eq!(items[1].record, client("Alan", "Turing"));
    }

    #[test]
    fn name_index_finds_by_last_then_first() {
        let dir = TempDir::new().expect("temp dir");
        let store = DocumentStore::open(dir.path(), "clients", schema()).expect("open");
        for (first, last) in [("Ada", "Lovelace"), ("Byron", "Lovelace"), ("Alan", "Turing")] {
            store.insert(&client(first, last)).expect("insert");
        }

        assert_eq!(store.find_by_index("name", &["Lovelace"]).expect("query").len(), 2);
        assert_eq!(
            store.find_by_index("name", &["Lovelace", "Ada"]).expect("query")[0].record,
            client("Ada", "Lovelace")
        );
        assert!(matches!(
            store.find_by_index("email", &["x"]),
            Err(StoreError::UnknownIndex(_))
        ));
    }

    #[test]
    fn corrupt_lines_name_their_position() {
        let dir = TempDir::new().expect("temp dir");
        let store = DocumentStore::open(dir.path(), "clients", schema()).expect("open");
        store.insert(&client("Ada", "Lovelace")).expect("insert");
        let mut file = store.open_for_append().expect("append");
        writeln!(file, "{{not json").expect("write");

        assert!(matches!(
            store.load_all(),
            Err(StoreError::Decode { line: 2, .. })
        ));
    }
}
