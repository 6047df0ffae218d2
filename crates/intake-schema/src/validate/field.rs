use crate::{
    err,
    error::ErrorTree,
    node::FieldDescriptor,
    types::InputFormat,
    validate::{naming::validate_ident, options::validate_options},
};

/// Local invariants of one descriptor.
pub(crate) fn validate_field(field: &FieldDescriptor) -> ErrorTree {
    let mut errs = ErrorTree::new();

    if let Err(msg) = validate_ident(field.name) {
        errs.add(msg);
    }
    if field.label.trim().is_empty() {
        err!(errs, "label is empty");
    }

    // cardinality must agree with the declared kind
    if field.cardinality != field.kind.cardinality() {
        err!(
            errs,
            "cardinality {} does not match kind {}",
            field.cardinality,
            field.kind
        );
    }

    if field.count == 0 {
        err!(errs, "count must be at least 1");
    } else if field.count > 1 && !field.kind.is_list() {
        err!(errs, "count {} is only valid on list fields", field.count);
    }

    if field.input != InputFormat::Plain && field.kind.primitive().is_integer_encoded() {
        err!(
            errs,
            "input format {} requires a text field, found {}",
            field.input,
            field.kind
        );
    }

    for segment in field.path {
        if let Err(msg) = validate_ident(segment) {
            err!(errs, "document path segment: {msg}");
        }
    }

    validate_options(field, &mut errs);

    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{node::Group, types::Cardinality};

    const G: Group = Group::section("Test");

    #[test]
    fn plain_text_field_is_valid() {
        let f = FieldDescriptor::text("email", "Email", G, &["email"]).input(InputFormat::Email);

        assert!(validate_field(&f).is_empty());
    }

    #[test]
    fn mismatched_cardinality_is_reported() {
        let f = FieldDescriptor::text("email", "Email", G, &["email"])
            .cardinality(Cardinality::Multiple);

        assert_eq!(validate_field(&f).len(), 1);
    }

    #[test]
    fn count_requires_list_kind() {
        let f = FieldDescriptor::int("household_size", "Size", G, &["size"]).count(3);

        assert_eq!(validate_field(&f).len(), 1);
    }

    #[test]
    fn bad_segments_and_label_accumulate() {
        let f = FieldDescriptor::boolean("photo_id", " ", G, &["Photo", "id"])
            .input(InputFormat::Month);
        let errs = validate_field(&f);

        // label, input on bool, bad segment
        assert_eq!(errs.len(), 3);
    }
}
