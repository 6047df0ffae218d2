//! Shared fixtures: the client schema and a few canned submissions.

pub(crate) use intake_client_schema::options::{
    DISABILITIES, ETHNICITY, GENDER, MILITARY_BRANCH, PHONE_TYPE,
};

use intake_schema::node::{FieldDescriptor, Schema};

pub(crate) fn schema() -> &'static Schema {
    intake_client_schema::schema().expect("client schema loads")
}

pub(crate) fn descriptor(name: &str) -> &'static FieldDescriptor {
    schema()
        .describe(name)
        .unwrap_or_else(|e| panic!("fixture field: {e}"))
}

/// A realistic, fully populated submission.
pub(crate) fn full_submission() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name_first", "Ada"),
        ("name_middle", "K"),
        ("name_last", "Lovelace"),
        ("gender", "1"),
        ("birth_date", "1980-12"),
        ("address_street", "1 Main St"),
        ("address_city", "Springfield"),
        ("address_state", "IL"),
        ("address_zipcode", "62701"),
        ("phone_number", "555-0100"),
        ("phone_type", "16"),
        ("phone_voicemail", "on"),
        ("email", "ada@example.org"),
        ("transportation_bus", "on"),
        ("unemployed_status", "on"),
        ("unemployed_date", "2024-01"),
        ("employment_status", "part_time"),
        ("employment_status", "seasonal"),
        ("industries[0]", "Retail"),
        ("industries[1]", "Food Service"),
        ("ethnicity", "asian"),
        ("language_known", "French"),
        ("household_marital_status", "2"),
        ("household_annual_income", "32000"),
        ("household_size", "4"),
        ("household_number_minor_children", "2"),
        ("education_level", "6"),
        ("disabilities", "elderly"),
        ("citizenship", "1"),
        ("photo_id", "on"),
        ("military_branch", "navy"),
        ("affirmed_name", "Ada Lovelace"),
        ("affirmed_date", "2024-05-17"),
        ("_csrf", "token"),
    ]
}
