use intake_schema::{
    node::{EnumValue, FieldDescriptor, Schema},
    types::{InputFormat, Kind, Primitive},
};
use serde::Serialize;

///
/// InputKind
/// widget the template renders for one field
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Checkbox,
    CheckboxGroup,
    Date,
    Email,
    Month,
    Number,
    Select,
    Signature,
    Text,
}

impl InputKind {
    #[must_use]
    pub const fn for_field(field: &FieldDescriptor) -> Self {
        match (field.kind, field.input) {
            (Kind::Scalar(Primitive::Bool), _) => Self::Checkbox,
            (Kind::List(Primitive::Enum), _) => Self::CheckboxGroup,
            (Kind::Scalar(Primitive::Enum), _) => Self::Select,
            (Kind::Scalar(Primitive::Date), _) => Self::Date,
            (Kind::Scalar(Primitive::Int), _) => Self::Number,
            (_, InputFormat::Email) => Self::Email,
            (_, InputFormat::Month) => Self::Month,
            (_, InputFormat::Signature) => Self::Signature,
            _ => Self::Text,
        }
    }
}

///
/// FormOption
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormOption {
    pub label: &'static str,
    pub value: EnumValue,
}

///
/// FormField
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub multiple: bool,

    /// Number of inputs to render; repeated inputs submit as `name[i]`.
    pub count: u8,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FormOption>,
}

impl From<&FieldDescriptor> for FormField {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name,
            label: field.label,
            input: InputKind::for_field(field),
            required: field.required,
            multiple: field.is_multiple(),
            count: field.count,
            options: field
                .options
                .iter()
                .map(|o| FormOption {
                    label: o.label,
                    value: o.value,
                })
                .collect(),
        }
    }
}

///
/// SubGroup
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SubGroup {
    pub title: Option<&'static str>,
    pub fields: Vec<FormField>,
}

///
/// Section
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub groups: Vec<SubGroup>,
}

///
/// FormLayout
///
/// Sections, then sub-groups, then fields, each in the order the schema
/// first declares them. Presentation only; storage never reads it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FormLayout {
    pub sections: Vec<Section>,
}

impl FormLayout {
    #[must_use]
    pub fn build(schema: &Schema) -> Self {
        let mut layout = Self::default();

        for field in schema.all_descriptors() {
            let section = match layout
                .sections
                .iter()
                .position(|s| s.title == field.group.section)
            {
                Some(i) => &mut layout.sections[i],
                None => {
                    layout.sections.push(Section {
                        title: field.group.section,
                        groups: Vec::new(),
                    });
                    let last = layout.sections.len() - 1;
                    &mut layout.sections[last]
                }
            };

            let title = field.group.sub_group;
            let group = match section.groups.iter().position(|g| g.title == title) {
                Some(i) => &mut section.groups[i],
                None => {
                    section.groups.push(SubGroup {
                        title,
                        fields: Vec::new(),
                    });
                    let last = section.groups.len() - 1;
                    &mut section.groups[last]
                }
            };

            group.fields.push(FormField::from(field));
        }

        layout
    }

    /// Every field in render order.
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.sections
            .iter()
            .flat_map(|s| &s.groups)
            .flat_map(|g| &g.fields)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> FormLayout {
        FormLayout::build(intake_client_schema::schema().expect("client schema"))
    }

    #[test]
    fn sections_follow_declaration_order() {
        let titles: Vec<_> = layout().sections.iter().map(|s| s.title).collect();

        assert_eq!(
            titles,
            vec!["Contact Information", "Employment", "Demographics", "Acceptance"]
        );
    }

    #[test]
    fn every_field_is_rendered_once() {
        let schema = intake_client_schema::schema().expect("client schema");
        let names: Vec<_> = layout().fields().map(|f| f.name).collect();

        assert_eq!(names.len(), schema.len());
        assert_eq!(names[..3], ["name_first", "name_middle", "name_last"]);
    }

    #[test]
    fn widgets_follow_kind_and_format() {
        let layout = layout();
        let input = |name: &str| {
            layout
                .fields()
                .find(|f| f.name == name)
                .map(|f| f.input)
                .expect("field rendered")
        };

        assert_eq!(input("phone_voicemail"), InputKind::Checkbox);
        assert_eq!(input("ethnicity"), InputKind::CheckboxGroup);
        assert_eq!(input("gender"), InputKind::Select);
        assert_eq!(input("email"), InputKind::Email);
        assert_eq!(input("birth_date"), InputKind::Month);
        assert_eq!(input("affirmed_signature"), InputKind::Signature);
        assert_eq!(input("household_size"), InputKind::Number);
        assert_eq!(input("industries"), InputKind::Text);
    }

    #[test]
    fn repeated_inputs_and_options_are_exposed() {
        let layout = layout();
        let industries = layout.fields().find(|f| f.name == "industries").expect("industries");
        let gender = layout.fields().find(|f| f.name == "gender").expect("gender");

        assert_eq!(industries.count, 3);
        assert!(industries.multiple);
        assert_eq!(gender.options[0].label, "Female");
        assert_eq!(gender.options[0].value, EnumValue::Int(1));
    }
}
