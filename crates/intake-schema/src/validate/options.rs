use crate::{err, error::ErrorTree, node::FieldDescriptor};
use std::collections::BTreeSet;

/// Enum option invariants: present iff the field is enum-kind, unique
/// values, non-empty labels, and a single value type per field.
pub(crate) fn validate_options(field: &FieldDescriptor, errs: &mut ErrorTree) {
    let is_enum = field.kind.is_enum();

    match (is_enum, field.options.is_empty()) {
        (true, true) => {
            err!(errs, "enum field declares no options");
            return;
        }
        (false, false) => {
            err!(errs, "options declared on non-enum kind {}", field.kind);
            return;
        }
        (false, true) => return,
        (true, false) => {}
    }

    let declared = field.options[0].value;
    let mut seen = BTreeSet::new();

    for option in field.options {
        if option.label.trim().is_empty() {
            err!(errs, "option '{}' has an empty label", option.value);
        }
        if !option.value.same_type(declared) {
            err!(
                errs,
                "option '{}' is {} but the field declares {} values",
                option.value,
                option.value.type_name(),
                declared.type_name()
            );
        }
        if !seen.insert(option.value.to_string()) {
            err!(errs, "duplicate option value '{}'", option.value);
        }
        if let crate::node::EnumValue::Text(text) = option.value
            && text.is_empty()
        {
            err!(errs, "option '{}' has an empty value", option.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{EnumOption, Group};

    const G: Group = Group::section("Test");

    fn check(field: &FieldDescriptor) -> ErrorTree {
        let mut errs = ErrorTree::new();
        validate_options(field, &mut errs);

        errs
    }

    #[test]
    fn enum_without_options_is_inconsistent() {
        let f = FieldDescriptor::select("gender", "Gender", G, &["gender"], &[]);

        assert_eq!(check(&f).len(), 1);
    }

    #[test]
    fn options_on_text_field_are_inconsistent() {
        const OPTS: &[EnumOption] = &[EnumOption::text("A", "a")];
        let f = FieldDescriptor::text("email", "Email", G, &["email"]).options(OPTS);

        assert_eq!(check(&f).len(), 1);
    }

    #[test]
    fn duplicate_and_mixed_values_are_reported() {
        const OPTS: &[EnumOption] = &[
            EnumOption::int("One", 1),
            EnumOption::int("Uno", 1),
            EnumOption::text("Two", "2"),
            EnumOption::text("", "3"),
        ];
        let f = FieldDescriptor::multi_select("n", "N", G, &["n"], OPTS);

        // duplicate 1, mixed type on "2" and "3", empty label
        assert_eq!(check(&f).len(), 4);
    }

    #[test]
    fn well_formed_options_pass() {
        const OPTS: &[EnumOption] = &[EnumOption::text("Female", "F"), EnumOption::text("Male", "M")];
        let f = FieldDescriptor::select("gender", "Gender", G, &["gender"], OPTS);

        assert!(check(&f).is_empty());
    }
}
