//! Core runtime for intake records: typed values, inbound coercion, record
//! assembly, and projection into flattened columns or nested documents.
#![warn(unreachable_pub)]

pub mod coerce;
pub mod error;
pub mod project;
pub mod record;
pub mod value;

#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Domain vocabulary only; errors and mappers are imported by path.
///

pub mod prelude {
    pub use crate::{
        record::{Assembler, Record, RecordDraft},
        value::Value,
    };
    pub use intake_schema::{
        node::{EnumOption, EnumValue, FieldDescriptor, Schema},
        types::{Kind, Primitive},
    };
}
