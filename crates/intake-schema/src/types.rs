use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    Single,
    Multiple,
}

///
/// Primitive
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Date,
    Enum,
    Int,
    Text,
}

impl Primitive {
    #[must_use]
    pub const fn is_enum(self) -> bool {
        matches!(self, Self::Enum)
    }

    // everything except Text lands in an integer column when flattened
    #[must_use]
    pub const fn is_integer_encoded(self) -> bool {
        !matches!(self, Self::Text)
    }
}

///
/// Kind
///
/// Declared shape of one field: a single primitive, or an ordered list of
/// one primitive. Lists of lists are not representable.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Kind {
    Scalar(Primitive),
    List(Primitive),
}

impl Kind {
    /// The primitive a single raw value coerces to.
    #[must_use]
    pub const fn primitive(self) -> Primitive {
        match self {
            Self::Scalar(p) | Self::List(p) => p,
        }
    }

    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List(_))
    }

    #[must_use]
    pub const fn is_enum(self) -> bool {
        self.primitive().is_enum()
    }

    /// The cardinality this kind implies.
    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::Scalar(_) => Cardinality::Single,
            Self::List(_) => Cardinality::Multiple,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(p) => write!(f, "{p}"),
            Self::List(p) => write!(f, "List<{p}>"),
        }
    }
}

///
/// InputFormat
/// presentation hint for the form renderer, ignored by storage
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum InputFormat {
    #[default]
    Plain,
    Email,
    Month,
    Signature,
}

///
/// TESTS
///
