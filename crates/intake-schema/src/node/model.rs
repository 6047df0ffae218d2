use crate::prelude::*;

///
/// DocumentIndex
///
/// Secondary access pattern on the nested store. Projections are dotted
/// leaf paths carried alongside the key attributes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DocumentIndex {
    pub name: &'static str,
    pub projection: &'static [&'static str],
}

///
/// RecordModel
/// Declarative description of one record type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RecordModel {
    /// Stable record name (used for default table naming).
    pub name: &'static str,

    /// Ordered field list; declaration order drives form rendering and
    /// flattened column order.
    pub fields: &'static [FieldDescriptor],

    /// Fields concatenated (with `+`) into the nested store's sort key.
    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub sort_key: &'static [&'static str],

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub indexes: &'static [DocumentIndex],
}
