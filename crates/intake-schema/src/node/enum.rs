use crate::prelude::*;
use std::fmt;

///
/// EnumValue
///
/// Canonical wire/storage value of one option. Every option of a field uses
/// the same variant; that variant is the field's declared enum value type.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
    Int(i64),
    Text(&'static str),
}

impl EnumValue {
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }

    #[must_use]
    pub const fn same_type(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Int(_), Self::Int(_)) | (Self::Text(_), Self::Text(_))
        )
    }

    /// Exact identity against raw submitted text, using this value's type.
    ///
    /// Integer values compare numerically (`"04"` matches `4`); text values
    /// compare byte-for-byte with no case folding or trimming.
    #[must_use]
    pub fn matches_raw(self, raw: &str) -> bool {
        match self {
            Self::Int(v) => raw.parse::<i64>().is_ok_and(|n| n == v),
            Self::Text(v) => raw == v,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

///
/// EnumOption
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct EnumOption {
    pub label: &'static str,
    pub value: EnumValue,
}

impl EnumOption {
    #[must_use]
    pub const fn int(label: &'static str, value: i64) -> Self {
        Self {
            label,
            value: EnumValue::Int(value),
        }
    }

    #[must_use]
    pub const fn text(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value: EnumValue::Text(value),
        }
    }
}

///
/// TESTS
///
