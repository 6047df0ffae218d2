use crate::prelude::*;
use std::ops::Not;

///
/// Group
/// presentation grouping: a form section and an optional sub-group heading
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Group {
    pub section: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<&'static str>,
}

impl Group {
    #[must_use]
    pub const fn new(section: &'static str, sub_group: Option<&'static str>) -> Self {
        Self { section, sub_group }
    }

    #[must_use]
    pub const fn section(section: &'static str) -> Self {
        Self::new(section, None)
    }

    #[must_use]
    pub const fn sub(self, sub_group: &'static str) -> Self {
        Self::new(self.section, Some(sub_group))
    }
}

///
/// FieldDescriptor
///
/// Static metadata for one logical field of a record. `name` is the stable
/// key used on the wire and as the flattened column; `path` is the leaf
/// position in the nested document.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: Kind,

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [EnumOption],

    pub cardinality: Cardinality,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub required: bool,

    pub group: Group,
    pub label: &'static str,
    pub path: &'static [&'static str],
    pub input: InputFormat,
    pub count: u8,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(
        name: &'static str,
        kind: Kind,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            kind,
            options: &[],
            cardinality: kind.cardinality(),
            required: false,
            group,
            label,
            path,
            input: InputFormat::Plain,
            count: 1,
        }
    }

    //
    // shorthand constructors
    //

    #[must_use]
    pub const fn text(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
    ) -> Self {
        Self::new(name, Kind::Scalar(Primitive::Text), label, group, path)
    }

    #[must_use]
    pub const fn int(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
    ) -> Self {
        Self::new(name, Kind::Scalar(Primitive::Int), label, group, path)
    }

    #[must_use]
    pub const fn boolean(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
    ) -> Self {
        Self::new(name, Kind::Scalar(Primitive::Bool), label, group, path)
    }

    #[must_use]
    pub const fn date(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
    ) -> Self {
        Self::new(name, Kind::Scalar(Primitive::Date), label, group, path)
    }

    #[must_use]
    pub const fn select(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
        options: &'static [EnumOption],
    ) -> Self {
        Self::new(name, Kind::Scalar(Primitive::Enum), label, group, path).options(options)
    }

    #[must_use]
    pub const fn multi_select(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
        options: &'static [EnumOption],
    ) -> Self {
        Self::new(name, Kind::List(Primitive::Enum), label, group, path).options(options)
    }

    #[must_use]
    pub const fn text_list(
        name: &'static str,
        label: &'static str,
        group: Group,
        path: &'static [&'static str],
    ) -> Self {
        Self::new(name, Kind::List(Primitive::Text), label, group, path)
    }

    //
    // modifiers
    //

    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    #[must_use]
    pub const fn input(self, input: InputFormat) -> Self {
        Self { input, ..self }
    }

    #[must_use]
    pub const fn count(self, count: u8) -> Self {
        Self { count, ..self }
    }

    #[must_use]
    pub const fn options(self, options: &'static [EnumOption]) -> Self {
        Self { options, ..self }
    }

    #[must_use]
    pub const fn cardinality(self, cardinality: Cardinality) -> Self {
        Self {
            cardinality,
            ..self
        }
    }

    //
    // queries
    //

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self.cardinality, Cardinality::Multiple)
    }

    /// Dotted form of `path`, e.g. `name.first`.
    #[must_use]
    pub fn document_path(&self) -> String {
        self.path.join(".")
    }

    /// Find the option whose value is identical to `raw` under the declared
    /// value type.
    #[must_use]
    pub fn option_for_raw(&self, raw: &str) -> Option<&'static EnumOption> {
        self.options.iter().find(|o| o.value.matches_raw(raw))
    }

    /// Find the option carrying exactly `value`.
    #[must_use]
    pub fn option_for_value(&self, value: EnumValue) -> Option<&'static EnumOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// 1-based declaration position of `option` within this field.
    #[must_use]
    pub fn ordinal_of(&self, option: &EnumOption) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.value == option.value)
            .map(|i| i + 1)
    }

    /// Option at a 1-based declaration position.
    #[must_use]
    pub fn option_at_ordinal(&self, ordinal: i64) -> Option<&'static EnumOption> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;

        self.options.get(index)
    }
}

///
/// TESTS
///
