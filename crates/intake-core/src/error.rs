use crate::project::ColumnType;
use derive_more::{Deref, IntoIterator};
use intake_schema::{node::UnknownFieldError, types::Kind};
use std::fmt;
use thiserror::Error as ThisError;

///
/// CoercionError
///
/// Rejection of one submitted value. Each variant names the field so a
/// batch can be shown back to the person filling in the form.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CoercionError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}': '{raw}' is not a YYYY-MM-DD date")]
    MalformedDate { field: String, raw: String },

    #[error("field '{field}': '{raw}' is not a base-10 integer")]
    MalformedInteger { field: String, raw: String },

    #[error("field '{field}': '{raw}' is not one of the declared options")]
    UnknownEnumValue { field: String, raw: String },
}

impl CoercionError {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnknownField { field }
            | Self::MalformedDate { field, .. }
            | Self::MalformedInteger { field, .. }
            | Self::UnknownEnumValue { field, .. } => field,
        }
    }
}

impl From<UnknownFieldError> for CoercionError {
    fn from(err: UnknownFieldError) -> Self {
        Self::UnknownField { field: err.name }
    }
}

///
/// SubmissionErrors
/// every per-field rejection from one submission, in submission order
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq)]
pub struct SubmissionErrors(Vec<CoercionError>);

impl SubmissionErrors {
    pub(crate) const fn new(errors: Vec<CoercionError>) -> Self {
        Self(errors)
    }

    /// Names of the rejected fields, deduplicated, in first-seen order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for err in &self.0 {
            if !out.contains(&err.field()) {
                out.push(err.field());
            }
        }

        out
    }
}

impl fmt::Display for SubmissionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} submitted value(s) rejected", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  - {err}")?;
        }

        Ok(())
    }
}

impl std::error::Error for SubmissionErrors {}

///
/// ProjectionError
///
/// Failure to move a value between its typed form and a storage form.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ProjectionError {
    #[error("field '{field}': expected {expected}, found {found}")]
    KindMismatch {
        field: &'static str,
        expected: Kind,
        found: &'static str,
    },

    #[error("field '{field}': option '{value}' is not declared")]
    UndeclaredOption { field: &'static str, value: String },

    #[error("field '{field}': expected a {expected} column")]
    ColumnType {
        field: &'static str,
        expected: ColumnType,
    },

    #[error("field '{field}': cannot decode stored value {stored}")]
    Malformed { field: &'static str, stored: String },

    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("'{name}' is not a valid SQL identifier")]
    InvalidIdentifier { name: String },

    #[error("document is missing '{path}'")]
    MissingPath { path: String },

    #[error("record belongs to schema '{found}', mapper expects '{expected}'")]
    ForeignRecord {
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{field}': list item {item:?} is empty or contains a line break")]
    UnstorableListItem { field: &'static str, item: String },
}

impl ProjectionError {
    /// The field whose submitted value cannot be stored, when the failure is
    /// one the submitter can fix.
    #[must_use]
    pub const fn rejected_field(&self) -> Option<&'static str> {
        match self {
            Self::UnstorableListItem { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_errors_list_every_rejection() {
        let errs = SubmissionErrors::new(vec![
            CoercionError::MalformedInteger {
                field: "household_size".into(),
                raw: "four".into(),
            },
            CoercionError::UnknownEnumValue {
                field: "gender".into(),
                raw: "X".into(),
            },
            CoercionError::MalformedInteger {
                field: "household_size".into(),
                raw: "5.5".into(),
            },
        ]);

        assert_eq!(errs.len(), 3);
        assert_eq!(errs.fields(), vec!["household_size", "gender"]);
        assert!(errs.to_string().starts_with("3 submitted value(s) rejected"));
        assert!(errs.to_string().contains("'X' is not one of the declared options"));
    }

    #[test]
    fn only_unstorable_items_name_a_rejected_field() {
        let unstorable = ProjectionError::UnstorableListItem {
            field: "industries",
            item: "Retail\n".into(),
        };
        let count = ProjectionError::ColumnCount {
            expected: 3,
            found: 2,
        };

        assert_eq!(unstorable.rejected_field(), Some("industries"));
        assert_eq!(count.rejected_field(), None);
        assert!(unstorable.to_string().contains(r#""Retail\n""#));
    }

    #[test]
    fn unknown_field_converts_from_schema_lookup() {
        let err: CoercionError = UnknownFieldError::new("not_a_real_field").into();

        assert_eq!(err.field(), "not_a_real_field");
    }
}
