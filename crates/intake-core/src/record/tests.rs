use super::*;
use crate::test_support::{PHONE_TYPE, full_submission, schema};

fn assembler() -> Assembler {
    Assembler::new(schema())
}

#[test]
fn begin_gives_every_field_its_empty_value() {
    let draft = assembler().begin();

    assert_eq!(draft.get("email"), Ok(&Value::Absent));
    assert_eq!(draft.get("phone_voicemail"), Ok(&Value::Bool(false)));
    assert_eq!(draft.get("industries"), Ok(&Value::List(vec![])));
    assert_eq!(draft.get("household_size"), Ok(&Value::Absent));
}

#[test]
fn industries_accumulate_and_skip_empty_repetitions() {
    let a = assembler();
    let mut draft = a.begin();

    for raw in ["Retail", "Food Service", ""] {
        assert_eq!(a.apply(&mut draft, "industries", raw), Ok(Applied::Appended));
    }

    assert_eq!(
        a.finish(draft).get("industries"),
        Ok(&Value::List(vec!["Retail".into(), "Food Service".into()]))
    );
}

#[test]
fn indexed_keys_feed_the_same_list_in_submission_order() {
    let record = assembler()
        .assemble([("industries[1]", "Retail"), ("industries[0]", "Food Service")])
        .expect("valid submission");

    assert_eq!(
        record.get("industries"),
        Ok(&Value::List(vec!["Retail".into(), "Food Service".into()]))
    );
}

#[test]
fn single_valued_fields_overwrite() {
    let a = assembler();
    let mut draft = a.begin();

    a.apply(&mut draft, "phone_type", "4").expect("home");
    a.apply(&mut draft, "phone_type", "16").expect("mobile");

    assert_eq!(draft.get("phone_type"), Ok(&Value::Enum(&PHONE_TYPE[4])));
}

#[test]
fn voicemail_checkbox_presence() {
    let a = assembler();

    let unchecked = a.assemble([("name_first", "Ada")]).expect("valid");
    let checked = a.assemble([("phone_voicemail", "on")]).expect("valid");

    assert_eq!(unchecked.get("phone_voicemail"), Ok(&Value::Bool(false)));
    assert_eq!(checked.get("phone_voicemail"), Ok(&Value::Bool(true)));
}

#[test]
fn unknown_field_leaves_the_draft_unchanged() {
    let a = assembler();
    let mut draft = a.begin();
    a.apply(&mut draft, "email", "a@b.org").expect("email");
    let before = draft.clone().finish();

    let err = a.apply(&mut draft, "not_a_real_field", "x").unwrap_err();

    assert_eq!(
        err,
        CoercionError::UnknownField {
            field: "not_a_real_field".into()
        }
    );
    assert_eq!(draft.finish(), before);
}

#[test]
fn rejected_value_leaves_the_previous_one() {
    let a = assembler();
    let mut draft = a.begin();
    a.apply(&mut draft, "household_size", "3").expect("size");

    assert!(a.apply(&mut draft, "household_size", "three").is_err());
    assert_eq!(draft.get("household_size"), Ok(&Value::Int(3)));
}

#[test]
fn bookkeeping_keys_are_skipped() {
    let a = assembler();
    let mut draft = a.begin();

    assert_eq!(a.apply(&mut draft, "_csrf", "abc"), Ok(Applied::Skipped));
    assert_eq!(a.apply(&mut draft, "_section[2]", "x"), Ok(Applied::Skipped));
}

#[test]
fn assemble_reports_every_bad_field_at_once() {
    let errs = assembler()
        .assemble([
            ("household_size", "four"),
            ("name_first", "Ada"),
            ("gender", "X"),
            ("affirmed_date", "2024-13-01"),
            ("bogus", "1"),
        ])
        .unwrap_err();

    assert_eq!(
        errs.fields(),
        vec!["household_size", "gender", "affirmed_date", "bogus"]
    );
}

#[test]
fn full_submission_assembles() {
    let record = assembler().assemble(full_submission()).expect("valid");

    assert_eq!(record.get("name_last"), Ok(&Value::Text("Lovelace".into())));
    assert_eq!(record.get("household_size"), Ok(&Value::Int(4)));
    assert_eq!(record.get("photo_id"), Ok(&Value::Bool(true)));
    assert_eq!(record.get("convicted"), Ok(&Value::Bool(false)));
    assert_eq!(record.get("ethnicity_other"), Ok(&Value::Absent));
    assert_eq!(
        record.get("employment_status").map(|v| v.as_list().map(<[_]>::len)),
        Ok(Some(2))
    );
    assert!(record.belongs_to(schema()));
}

#[test]
fn records_serialize_by_field_name() {
    let record = assembler()
        .assemble([("name_first", "Ada"), ("phone_type", "16")])
        .expect("valid");
    let json = serde_json::to_value(&record).expect("serialize");

    assert_eq!(json["name_first"], "Ada");
    assert_eq!(json["phone_type"], 16);
    assert_eq!(json["email"], serde_json::Value::Null);
    assert_eq!(json["industries"], serde_json::json!([]));
}
