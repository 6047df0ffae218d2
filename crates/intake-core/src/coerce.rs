//! Inbound coercion: raw submitted text → typed [`Value`].

use crate::{
    error::CoercionError,
    value::{Value, date},
};
use intake_schema::{
    node::FieldDescriptor,
    types::{Kind, Primitive},
};

/// Coerce one raw value for `field`.
///
/// `raw` is `None` when the key was missing from the submission and
/// `Some("")` when it was present but empty. Both yield `Absent` for scalar
/// kinds, `false` for booleans, and an empty sequence for lists.
pub fn coerce_inbound(field: &FieldDescriptor, raw: Option<&str>) -> Result<Value, CoercionError> {
    match field.kind {
        Kind::Scalar(p) => coerce_scalar(field, p, raw.unwrap_or_default()),
        Kind::List(p) => match coerce_scalar(field, p, raw.unwrap_or_default())? {
            Value::Absent => Ok(Value::List(Vec::new())),
            value => Ok(Value::List(vec![value])),
        },
    }
}

pub(crate) fn coerce_scalar(
    field: &FieldDescriptor,
    primitive: Primitive,
    raw: &str,
) -> Result<Value, CoercionError> {
    match primitive {
        // checkboxes: any submitted text means checked
        Primitive::Bool => Ok(Value::Bool(!raw.is_empty())),
        _ if raw.is_empty() => Ok(Value::Absent),

        Primitive::Text => Ok(Value::Text(raw.to_string())),

        Primitive::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| CoercionError::MalformedInteger {
                field: field.name.to_string(),
                raw: raw.to_string(),
            }),

        Primitive::Date => {
            date::parse_iso(raw)
                .map(Value::Date)
                .ok_or_else(|| CoercionError::MalformedDate {
                    field: field.name.to_string(),
                    raw: raw.to_string(),
                })
        }

        Primitive::Enum => {
            field
                .option_for_raw(raw)
                .map(Value::Enum)
                .ok_or_else(|| CoercionError::UnknownEnumValue {
                    field: field.name.to_string(),
                    raw: raw.to_string(),
                })
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GENDER, MILITARY_BRANCH, PHONE_TYPE, descriptor};

    #[test]
    fn empty_input_is_absent_not_a_default() {
        for name in ["email", "household_size", "birth_date", "gender", "phone_type"] {
            let f = descriptor(name);

            assert_eq!(coerce_inbound(f, Some("")), Ok(Value::Absent), "{name}");
            assert_eq!(coerce_inbound(f, None), Ok(Value::Absent), "{name}");
        }
    }

    #[test]
    fn booleans_follow_checkbox_presence() {
        let f = descriptor("phone_voicemail");

        assert_eq!(coerce_inbound(f, None), Ok(Value::Bool(false)));
        assert_eq!(coerce_inbound(f, Some("")), Ok(Value::Bool(false)));
        assert_eq!(coerce_inbound(f, Some("on")), Ok(Value::Bool(true)));
    }

    #[test]
    fn lists_wrap_single_values() {
        let f = descriptor("industries");

        assert_eq!(coerce_inbound(f, Some("")), Ok(Value::List(vec![])));
        assert_eq!(
            coerce_inbound(f, Some("Retail")),
            Ok(Value::List(vec![Value::Text("Retail".into())]))
        );
    }

    #[test]
    fn text_passes_through_untrimmed() {
        let f = descriptor("email");

        assert_eq!(
            coerce_inbound(f, Some(" a@b.org ")),
            Ok(Value::Text(" a@b.org ".into()))
        );
    }

    #[test]
    fn integers_are_base_ten() {
        let f = descriptor("household_size");

        assert_eq!(coerce_inbound(f, Some("4")), Ok(Value::Int(4)));
        assert_eq!(coerce_inbound(f, Some("-2")), Ok(Value::Int(-2)));
        for raw in ["four", "4.0", "0x10", " 4", "99999999999999999999"] {
            assert!(
                matches!(
                    coerce_inbound(f, Some(raw)),
                    Err(CoercionError::MalformedInteger { .. })
                ),
                "{raw}"
            );
        }
    }

    #[test]
    fn dates_are_strict() {
        let f = descriptor("affirmed_date");

        assert!(matches!(coerce_inbound(f, Some("2024-05-17")), Ok(Value::Date(_))));
        assert_eq!(
            coerce_inbound(f, Some("2024-02-30")),
            Err(CoercionError::MalformedDate {
                field: "affirmed_date".into(),
                raw: "2024-02-30".into(),
            })
        );
    }

    #[test]
    fn text_enum_resolves_by_exact_value() {
        let f = descriptor("military_branch");

        assert_eq!(
            coerce_inbound(f, Some("navy")),
            Ok(Value::List(vec![Value::Enum(&MILITARY_BRANCH[5])]))
        );
        assert_eq!(
            coerce_inbound(f, Some("X")),
            Err(CoercionError::UnknownEnumValue {
                field: "military_branch".into(),
                raw: "X".into(),
            })
        );
        assert!(coerce_inbound(f, Some("Navy")).is_err());
    }

    #[test]
    fn gender_takes_its_declared_value_not_its_label() {
        let f = descriptor("gender");

        assert_eq!(coerce_inbound(f, Some("1")), Ok(Value::Enum(&GENDER[0])));
        assert!(coerce_inbound(f, Some("F")).is_err());
        assert!(coerce_inbound(f, Some("Female")).is_err());
    }

    #[test]
    fn int_enum_resolves_numerically() {
        let f = descriptor("phone_type");

        assert_eq!(coerce_inbound(f, Some("16")), Ok(Value::Enum(&PHONE_TYPE[4])));
        assert_eq!(coerce_inbound(f, Some("016")), Ok(Value::Enum(&PHONE_TYPE[4])));
        // a label is never a value
        assert!(coerce_inbound(f, Some("Mobile")).is_err());
        assert!(coerce_inbound(f, Some("3")).is_err());
    }

    #[test]
    fn multi_select_accumulates_one_option_per_value() {
        let f = descriptor("ethnicity");

        assert!(matches!(
            coerce_inbound(f, Some("asian")),
            Ok(Value::List(items)) if items.len() == 1
        ));
        assert!(coerce_inbound(f, Some("4")).is_err(), "bit flags are not accepted");
    }
}
