use crate::{SchemaError, prelude::*, validate::validate_model};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// UnknownFieldError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown field '{name}'")]
pub struct UnknownFieldError {
    pub name: String,
}

impl UnknownFieldError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

///
/// Schema
///
/// A validated [`RecordModel`] with its name lookup and document shape.
/// Immutable after [`Schema::load`]; safe to share across threads.
///

#[derive(Debug)]
pub struct Schema {
    model: &'static RecordModel,
    index: BTreeMap<&'static str, usize>,
    shape: Shape,
}

impl Schema {
    /// Validate `model` and build the lookup structures.
    pub fn load(model: &'static RecordModel) -> Result<Self, SchemaError> {
        let (index, shape) = validate_model(model).map_err(SchemaError::Consistency)?;

        Ok(Self {
            model,
            index,
            shape,
        })
    }

    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.model.name
    }

    /// All descriptors in declaration order.
    #[must_use]
    pub const fn all_descriptors(&self) -> &'static [FieldDescriptor] {
        self.model.fields
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.model.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.model.fields.is_empty()
    }

    pub fn describe(&self, name: &str) -> Result<&'static FieldDescriptor, UnknownFieldError> {
        self.position(name)
            .map(|i| &self.model.fields[i])
            .ok_or_else(|| UnknownFieldError::new(name))
    }

    /// Declaration index of `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Options of an enum field; empty for every other kind.
    pub fn options_for(&self, name: &str) -> Result<&'static [EnumOption], UnknownFieldError> {
        self.describe(name).map(|f| f.options)
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub const fn sort_key(&self) -> &'static [&'static str] {
        self.model.sort_key
    }

    #[must_use]
    pub const fn indexes(&self) -> &'static [DocumentIndex] {
        self.model.indexes
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const G: Group = Group::section("Test");
    const GENDER: &[EnumOption] = &[EnumOption::text("Female", "F"), EnumOption::text("Male", "M")];
    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::text("name_last", "last", G, &["name", "last"]).required(),
        FieldDescriptor::select("gender", "Gender", G, &["gender"], GENDER),
        FieldDescriptor::text_list("industries", "Industries", G, &["industries"]).count(3),
    ];
    static MODEL: RecordModel = RecordModel {
        name: "client",
        fields: FIELDS,
        sort_key: &["name_last"],
        indexes: &[],
    };

    #[test]
    fn describe_finds_declared_fields() {
        let schema = Schema::load(&MODEL).expect("model is consistent");

        assert_eq!(schema.describe("gender").map(|f| f.label), Ok("Gender"));
        assert_eq!(schema.position("industries"), Some(2));
        assert_eq!(
            schema.describe("not_a_real_field"),
            Err(UnknownFieldError::new("not_a_real_field"))
        );
    }

    #[test]
    fn descriptors_keep_declaration_order() {
        let schema = Schema::load(&MODEL).expect("model is consistent");
        let names: Vec<_> = schema.all_descriptors().iter().map(|f| f.name).collect();

        assert_eq!(names, vec!["name_last", "gender", "industries"]);
    }

    #[test]
    fn options_for_is_empty_for_non_enum_fields() {
        let schema = Schema::load(&MODEL).expect("model is consistent");

        assert_eq!(schema.options_for("gender").map(<[_]>::len), Ok(2));
        assert_eq!(schema.options_for("name_last").map(<[_]>::len), Ok(0));
        assert!(schema.options_for("nope").is_err());
    }
}
