pub mod date;

#[cfg(test)]
mod tests;

use intake_schema::{
    node::{EnumOption, EnumValue},
    types::{Kind, Primitive},
};
use serde::{Serialize, Serializer, ser::SerializeSeq};

///
/// Value
///
/// A coerced field value.
///
/// Absent → nothing was submitted; distinct from `Text("")` and `Int(0)`.
/// List   → ordered values of a multi-valued field; never holds `Absent`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Absent,
    Bool(bool),
    Date(time::Date),
    Enum(&'static EnumOption),
    Int(i64),
    List(Vec<Self>),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Short variant name used in diagnostics.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Absent => "Absent",
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::Enum(_) => "Enum",
            Self::Int(_) => "Int",
            Self::List(_) => "List",
            Self::Text(_) => "Text",
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value has the shape `kind` declares. `Absent` conforms
    /// to every scalar kind; list items must be present scalars.
    #[must_use]
    pub fn conforms_to(&self, kind: Kind) -> bool {
        match (kind, self) {
            (Kind::Scalar(_), Self::Absent) => true,
            (Kind::Scalar(p), v) => v.is_primitive(p),
            (Kind::List(p), Self::List(items)) => items.iter().all(|v| v.is_primitive(p)),
            (Kind::List(_), _) => false,
        }
    }

    const fn is_primitive(&self, primitive: Primitive) -> bool {
        matches!(
            (primitive, self),
            (Primitive::Bool, Self::Bool(_))
                | (Primitive::Date, Self::Date(_))
                | (Primitive::Enum, Self::Enum(_))
                | (Primitive::Int, Self::Int(_))
                | (Primitive::Text, Self::Text(_))
        )
    }

    /// Plain-text rendering of a scalar, as used inside flattened lists.
    /// `None` for `Absent` and nested lists.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            Self::Date(d) => Some(date::format_iso(*d)),
            Self::Enum(option) => Some(option.value.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Absent | Self::List(_) => None,
        }
    }

    /// Document-leaf JSON encoding.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Absent => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Date(d) => Json::String(date::format_iso(*d)),
            Self::Enum(option) => match option.value {
                EnumValue::Int(v) => Json::from(v),
                EnumValue::Text(v) => Json::from(v),
            },
            Self::Int(i) => Json::from(*i),
            Self::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Text(s) => Json::String(s.clone()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Date(d) => serializer.collect_str(&date::format_iso(*d)),
            Self::Enum(option) => option.value.serialize(serializer),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<time::Date> for Value {
    fn from(d: time::Date) -> Self {
        Self::Date(d)
    }
}

impl From<&'static EnumOption> for Value {
    fn from(option: &'static EnumOption) -> Self {
        Self::Enum(option)
    }
}
