//! Field schema for intake records: descriptors, enum options, document
//! shape, and the consistency checks run when a schema is loaded.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

/// Maximum length for field identifiers (they double as SQL column names).
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{Cardinality, InputFormat, Kind, Primitive},
    };
    pub use serde::Serialize;
}

///
/// SchemaError
///
/// Fatal at startup: a schema that fails any consistency check is never
/// served.
///

#[derive(Clone, Debug, ThisError)]
pub enum SchemaError {
    #[error("schema consistency check failed:\n{0}")]
    Consistency(ErrorTree),
}

impl SchemaError {
    #[must_use]
    pub const fn tree(&self) -> &ErrorTree {
        match self {
            Self::Consistency(tree) => tree,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{prelude::*, SchemaError};

    const G: Group = Group::section("Test");

    static BROKEN: RecordModel = RecordModel {
        name: "client",
        fields: &[
            FieldDescriptor::select("gender", "Gender", G, &["gender"], &[]),
            FieldDescriptor::text("email", "Email", G, &["email"]),
            FieldDescriptor::text("email", "Email again", G, &["contact", "email"]),
        ],
        sort_key: &["name_last"],
        indexes: &[DocumentIndex {
            name: "name",
            projection: &["name.first"],
        }],
    };

    #[test]
    fn every_problem_is_reported_at_once() {
        let err = Schema::load(&BROKEN).expect_err("model is inconsistent");
        let SchemaError::Consistency(tree) = &err;

        // no options, duplicate name, unknown sort key, bad projection
        assert_eq!(tree.len(), 4, "{err}");
        assert!(err.to_string().starts_with("schema consistency check failed"));
    }
}
