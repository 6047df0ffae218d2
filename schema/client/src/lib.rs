//! The client intake record: every question on the intake form, its enum
//! options, and where each answer lives in the nested document.

pub mod fields;
pub mod options;

use intake_schema::{
    SchemaError,
    node::{DocumentIndex, RecordModel, Schema},
};
use std::sync::OnceLock;

///
/// MODEL
///

pub static MODEL: RecordModel = RecordModel {
    name: "client",
    fields: fields::FIELDS,
    sort_key: &["name_last", "name_first", "name_middle"],
    indexes: &[DocumentIndex {
        name: "name",
        projection: &["name.last", "name.first", "name.middle"],
    }],
};

static SCHEMA: OnceLock<Result<Schema, SchemaError>> = OnceLock::new();

/// The validated client schema, loaded once per process.
pub fn schema() -> Result<&'static Schema, SchemaError> {
    SCHEMA
        .get_or_init(|| Schema::load(&MODEL))
        .as_ref()
        .map_err(Clone::clone)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use intake_schema::types::{Kind, Primitive};

    #[test]
    fn client_schema_is_consistent() {
        let schema = schema().unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(schema.name(), "client");
        assert_eq!(schema.len(), fields::FIELDS.len());
    }

    #[test]
    fn multi_choice_fields_use_text_values() {
        let schema = schema().expect("client schema");

        for f in schema.all_descriptors() {
            if f.kind == Kind::List(Primitive::Enum) {
                assert!(
                    f.options
                        .iter()
                        .all(|o| matches!(o.value, intake_schema::node::EnumValue::Text(_))),
                    "{} should use text values",
                    f.name
                );
            }
        }
    }

    #[test]
    fn document_groups_related_fields() {
        let schema = schema().expect("client schema");
        let shape = schema.shape();

        assert_eq!(
            shape.get(&["name"]).map(intake_schema::node::Shape::keys),
            Some(vec!["first", "middle", "last"])
        );
        assert!(shape.get(&["demographics", "ethnicity", "identifies"]).is_some());
        assert!(shape.get(&["employment_status", "employer"]).is_some());
    }

    #[test]
    fn form_order_starts_with_the_name() {
        let schema = schema().expect("client schema");
        let first: Vec<_> = schema.all_descriptors().iter().take(3).map(|f| f.name).collect();

        assert_eq!(first, vec!["name_first", "name_middle", "name_last"]);
    }
}
