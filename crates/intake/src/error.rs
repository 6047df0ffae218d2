use crate::{config::ConfigError, store::StoreError, submission::SubmissionFormatError};
use derive_more::Display;
use intake_core::error::{CoercionError, ProjectionError, SubmissionErrors};
use intake_schema::SchemaError;
use serde::Serialize;
use thiserror::Error as ThisError;

type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,

    #[serde(skip)]
    #[source]
    source: Option<Source>,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
            source: None,
        }
    }

    fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Fields named by a rejected submission; empty for other kinds.
    #[must_use]
    pub fn rejected_fields(&self) -> &[String] {
        match &self.kind {
            ErrorKind::Rejected { fields } => fields,
            _ => &[],
        }
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        Self::new(ErrorKind::Internal, ErrorOrigin::Schema, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string()).with_source(err)
    }
}

impl From<CoercionError> for Error {
    fn from(err: CoercionError) -> Self {
        Self::new(
            ErrorKind::Rejected {
                fields: vec![err.field().to_string()],
            },
            ErrorOrigin::Coerce,
            err.to_string(),
        )
    }
}

impl From<SubmissionErrors> for Error {
    fn from(errs: SubmissionErrors) -> Self {
        let fields = errs.fields().into_iter().map(str::to_string).collect();

        Self::new(ErrorKind::Rejected { fields }, ErrorOrigin::Coerce, errs.to_string())
            .with_source(errs)
    }
}

impl From<SubmissionFormatError> for Error {
    fn from(err: SubmissionFormatError) -> Self {
        Self::new(ErrorKind::Unreadable, ErrorOrigin::Coerce, err.to_string()).with_source(err)
    }
}

impl From<ProjectionError> for Error {
    fn from(err: ProjectionError) -> Self {
        Self::new(projection_kind(&err), ErrorOrigin::Project, err.to_string()).with_source(err)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        let origin = match err {
            StoreError::Projection(_) => ErrorOrigin::Project,
            _ => ErrorOrigin::Store,
        };

        Self::new(store_kind(&err), origin, err.to_string()).with_source(err)
    }
}

// a value the submitter can change is a rejection, anything else is ours
fn projection_kind(err: &ProjectionError) -> ErrorKind {
    match err.rejected_field() {
        Some(field) => ErrorKind::Rejected {
            fields: vec![field.to_string()],
        },
        None => ErrorKind::Internal,
    }
}

fn store_kind(err: &StoreError) -> ErrorKind {
    match err {
        StoreError::Projection(inner) => projection_kind(inner),
        StoreError::Decode { .. } | StoreError::UnsupportedColumn { .. } => {
            ErrorKind::Store(StoreErrorKind::Corrupt)
        }
        StoreError::UnknownIndex(_) => ErrorKind::Store(StoreErrorKind::NotFound),
        StoreError::Sqlite(_) | StoreError::Io { .. } | StoreError::Encode(_) => {
            ErrorKind::Store(StoreErrorKind::Unavailable)
        }
    }
}

///
/// ErrorKind
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// One or more submitted values were rejected; the person filling in
    /// the form can fix these.
    Rejected { fields: Vec<String> },

    /// The submission as a whole has the wrong shape.
    Unreadable,

    Config,
    Store(StoreErrorKind),

    /// The caller cannot remediate this.
    Internal,
}

///
/// StoreErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum StoreErrorKind {
    Corrupt,
    NotFound,
    Unavailable,
}

///
/// ErrorOrigin
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Coerce,
    Config,
    Project,
    Schema,
    Store,
}

///
/// TESTS
///
