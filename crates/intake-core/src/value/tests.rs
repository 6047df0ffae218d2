use crate::value::{Value, date};
use intake_schema::{
    node::EnumOption,
    types::{Kind, Primitive},
};
use serde_json::json;

static FEMALE: EnumOption = EnumOption::text("Female", "F");
static HOME: EnumOption = EnumOption::int("Home", 4);

// ---- helpers -----------------------------------------------------------

fn v_date(raw: &str) -> Value {
    Value::Date(date::parse_iso(raw).expect("valid test date"))
}

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ---- conformance -------------------------------------------------------

#[test]
fn absent_conforms_to_every_scalar_kind() {
    for p in [
        Primitive::Bool,
        Primitive::Date,
        Primitive::Enum,
        Primitive::Int,
        Primitive::Text,
    ] {
        assert!(Value::Absent.conforms_to(Kind::Scalar(p)), "{p}");
        assert!(!Value::Absent.conforms_to(Kind::List(p)), "{p}");
    }
}

#[test]
fn lists_must_hold_present_scalars_of_the_declared_primitive() {
    let kind = Kind::List(Primitive::Text);

    assert!(Value::List(vec![]).conforms_to(kind));
    assert!(Value::List(vec![v_txt("Retail")]).conforms_to(kind));
    assert!(!Value::List(vec![Value::Absent]).conforms_to(kind));
    assert!(!Value::List(vec![Value::Int(1)]).conforms_to(kind));
    assert!(!v_txt("Retail").conforms_to(kind));
}

#[test]
fn scalar_mismatch_does_not_conform() {
    assert!(!Value::Int(3).conforms_to(Kind::Scalar(Primitive::Text)));
    assert!(Value::Enum(&FEMALE).conforms_to(Kind::Scalar(Primitive::Enum)));
}

// ---- rendering ---------------------------------------------------------

#[test]
fn scalar_text_renders_each_primitive() {
    assert_eq!(Value::Bool(true).scalar_text().as_deref(), Some("1"));
    assert_eq!(Value::Bool(false).scalar_text().as_deref(), Some("0"));
    assert_eq!(v_date("2019-07-04").scalar_text().as_deref(), Some("2019-07-04"));
    assert_eq!(Value::Enum(&FEMALE).scalar_text().as_deref(), Some("F"));
    assert_eq!(Value::Enum(&HOME).scalar_text().as_deref(), Some("4"));
    assert_eq!(Value::Int(-12).scalar_text().as_deref(), Some("-12"));
    assert_eq!(Value::Absent.scalar_text(), None);
}

#[test]
fn json_encoding_uses_canonical_enum_values() {
    let value = Value::List(vec![Value::Enum(&FEMALE), Value::Enum(&HOME)]);

    assert_eq!(value.to_json(), json!(["F", 4]));
    assert_eq!(Value::Absent.to_json(), json!(null));
    assert_eq!(v_date("2020-01-31").to_json(), json!("2020-01-31"));
}

#[test]
fn serialize_agrees_with_to_json() {
    let values = [
        Value::Absent,
        Value::Bool(true),
        v_date("1999-12-31"),
        Value::Enum(&HOME),
        Value::Int(42),
        Value::List(vec![v_txt("a"), v_txt("b")]),
        v_txt("text"),
    ];

    for value in values {
        let serialized = serde_json::to_value(&value).expect("serialize value");
        assert_eq!(serialized, value.to_json(), "{value:?}");
    }
}
