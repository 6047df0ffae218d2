//! The client intake questionnaire, in form order.

use crate::options::*;
use intake_schema::{
    node::{FieldDescriptor as F, Group},
    types::InputFormat::{Email, Month, Signature},
};

//
// sections
//

const CONTACT: Group = Group::section("Contact Information");
const EMPLOYMENT: Group = Group::section("Employment");
const DEMOGRAPHICS: Group = Group::section("Demographics");
const ACCEPTANCE: Group = Group::section("Acceptance");

const AFFIRM: &str = "I affirm that this information is correct to the best of my knowledge";
const NOT_COUNSELING: &str = "Services provided by WRA are psycho-educational in nature and are \
     resource-based. We do not provide or are responsible for therapeutic counseling. We offer a \
     list of providers for these services upon request";

pub const FIELDS: &[F] = &[
    // contact
    F::text("name_first", "first", CONTACT.sub("Name"), &["name", "first"]).required(),
    F::text("name_middle", "middle", CONTACT.sub("Name"), &["name", "middle"]),
    F::text("name_last", "last", CONTACT.sub("Name"), &["name", "last"]).required(),
    F::select("gender", "Gender", CONTACT, &["gender"], GENDER),
    F::text("birth_date", "Birth Date", CONTACT, &["birth_date"])
        .input(Month)
        .required(),
    F::text("address_street", "Street", CONTACT.sub("Address"), &["address", "street"]),
    F::text("address_city", "City", CONTACT.sub("Address"), &["address", "city"]),
    F::text("address_state", "State", CONTACT.sub("Address"), &["address", "state"]),
    F::text("address_zipcode", "Zip Code", CONTACT.sub("Address"), &["address", "zipcode"]),
    F::text("phone_number", "Number", CONTACT.sub("Phone"), &["phone", "number"]),
    F::select("phone_type", "Type", CONTACT.sub("Phone"), &["phone", "type"], PHONE_TYPE),
    F::boolean("phone_voicemail", "Leave message", CONTACT.sub("Phone"), &["phone", "voicemail"]),
    F::text("email", "Email address", CONTACT.sub("Email"), &["email"]).input(Email),
    F::text("emergency_contact_name", "name", CONTACT.sub("Emergency Contact"), &[
        "emergency_contact",
        "name",
    ]),
    F::text("emergency_contact_phone", "phone", CONTACT.sub("Emergency Contact"), &[
        "emergency_contact",
        "phone",
    ]),
    F::text("agency_name", "name", CONTACT.sub("Referring Agency"), &["agency", "name"]),
    F::text("agency_counselor", "counselor", CONTACT.sub("Referring Agency"), &[
        "agency",
        "counselor",
        "name",
    ]),
    F::text("agency_counselor_phone", "phone", CONTACT.sub("Referring Agency"), &[
        "agency",
        "counselor",
        "phone",
    ]),
    F::text("agency_counselor_email", "email", CONTACT.sub("Referring Agency"), &[
        "agency",
        "counselor",
        "email",
    ])
    .input(Email),
    F::boolean("transportation_car", "Car", CONTACT.sub("Mode of transportation"), &[
        "transportation",
        "car",
    ]),
    F::boolean("transportation_bus", "Bus", CONTACT.sub("Mode of transportation"), &[
        "transportation",
        "bus",
    ]),
    F::text("transportation_other", "Other", CONTACT.sub("Mode of transportation"), &[
        "transportation",
        "other",
    ]),
    // employment
    F::boolean("unemployed_status", "Unemployed?", EMPLOYMENT.sub("Unemployed"), &[
        "unemployed",
        "status",
    ]),
    F::text("unemployed_date", "When unemployed?", EMPLOYMENT.sub("Unemployed"), &[
        "unemployed",
        "date",
    ])
    .input(Month),
    F::multi_select(
        "employment_status",
        "Status",
        EMPLOYMENT.sub("Employment"),
        &["employment_status", "status"],
        EMPLOYMENT_STATUS,
    ),
    F::text("employment_status_employer", "Employer", EMPLOYMENT.sub("Employment"), &[
        "employment_status",
        "employer",
    ]),
    F::boolean("lost_income_recent", "Recently lost income?", EMPLOYMENT.sub("Lost Income"), &[
        "lost_income",
        "recent",
    ]),
    F::multi_select(
        "lost_income_reason",
        "Cause of income loss",
        EMPLOYMENT.sub("Lost Income"),
        &["lost_income", "reason"],
        LOST_INCOME_REASON,
    ),
    F::text("lost_income_reason_other", "Other", EMPLOYMENT.sub("Lost Income"), &[
        "lost_income",
        "reason_other",
    ]),
    F::text_list(
        "industries",
        "Industries",
        EMPLOYMENT.sub("Industries I'm looking for"),
        &["industries"],
    )
    .count(3),
    // demographics
    F::multi_select(
        "ethnicity",
        "Ethnicity",
        DEMOGRAPHICS.sub("Cultural"),
        &["demographics", "ethnicity", "identifies"],
        ETHNICITY,
    ),
    F::text("ethnicity_other", "Other ethnicity", DEMOGRAPHICS.sub("Cultural"), &[
        "demographics",
        "ethnicity",
        "other",
    ]),
    F::boolean(
        "language_english_2nd",
        "English is a second language",
        DEMOGRAPHICS.sub("Languages Spoken"),
        &["demographics", "language", "english_2nd"],
    ),
    F::text_list(
        "language_known",
        "List other languages spoken",
        DEMOGRAPHICS.sub("Languages Spoken"),
        &["demographics", "language", "known"],
    ),
    F::select(
        "household_marital_status",
        "Marital Status",
        DEMOGRAPHICS.sub("Household"),
        &["demographics", "household", "marital_status"],
        MARITAL_STATUS,
    ),
    F::int(
        "household_annual_income",
        "Annual household income",
        DEMOGRAPHICS.sub("Household"),
        &["demographics", "household", "annual_income"],
    ),
    F::multi_select(
        "household_issues",
        "Details",
        DEMOGRAPHICS.sub("Household"),
        &["demographics", "household", "issues"],
        HOUSEHOLD_ISSUES,
    ),
    F::int("household_size", "Size of household", DEMOGRAPHICS.sub("Household"), &[
        "demographics",
        "household",
        "size",
    ]),
    F::int(
        "household_number_minor_children",
        "Number of minor children",
        DEMOGRAPHICS.sub("Household"),
        &["demographics", "household", "minor_children"],
    ),
    F::int(
        "household_number_adult_children",
        "Number of adult children",
        DEMOGRAPHICS.sub("Household"),
        &["demographics", "household", "adult_children"],
    ),
    F::select(
        "education_level",
        "Education Level",
        DEMOGRAPHICS.sub("Education"),
        &["demographics", "education", "level"],
        EDUCATION_LEVEL,
    ),
    F::boolean(
        "education_currently_attending",
        "Currently attending school",
        DEMOGRAPHICS.sub("Education"),
        &["demographics", "education", "currently_attending"],
    ),
    F::multi_select(
        "disabilities",
        "Special Needs",
        DEMOGRAPHICS,
        &["demographics", "disabilities"],
        DISABILITIES,
    ),
    F::select(
        "citizenship",
        "Citizenship Status",
        DEMOGRAPHICS.sub("Citizenship"),
        &["citizenship"],
        CITIZENSHIP,
    ),
    F::boolean("photo_id", "Photo ID?", DEMOGRAPHICS.sub("Citizenship"), &["photo_id"]),
    F::boolean(
        "social_security_card",
        "Social Security Card?",
        DEMOGRAPHICS.sub("Citizenship"),
        &["social_security_card"],
    ),
    F::multi_select(
        "military_branch",
        "Branch",
        DEMOGRAPHICS.sub("Military"),
        &["military", "branch"],
        MILITARY_BRANCH,
    ),
    F::multi_select(
        "military_status",
        "Status",
        DEMOGRAPHICS.sub("Military"),
        &["military", "status"],
        MILITARY_STATUS,
    ),
    F::boolean(
        "previous_client",
        "Used our services in the past",
        DEMOGRAPHICS.sub("Previous Client"),
        &["previous_client", "status"],
    ),
    F::text("previous_client_when", "When?", DEMOGRAPHICS.sub("Previous Client"), &[
        "previous_client",
        "date",
    ])
    .input(Month),
    F::boolean(
        "convicted",
        "Been convicted of a felony",
        DEMOGRAPHICS.sub("Criminal record"),
        &["convicted"],
    ),
    F::boolean(
        "can_background_check",
        "Can pass background check",
        DEMOGRAPHICS.sub("Criminal record"),
        &["can_background_check"],
    ),
    // acceptance
    F::text("affirmed_signature", "Signature", ACCEPTANCE.sub(AFFIRM), &[
        "affirmed",
        "signature",
    ])
    .input(Signature),
    F::text("affirmed_name", "Print Name", ACCEPTANCE.sub(AFFIRM), &["affirmed", "name"]),
    F::date("affirmed_date", "Date", ACCEPTANCE.sub(AFFIRM), &["affirmed", "date"]),
    F::text(
        "accept_not_counseling_signature",
        "Signature",
        ACCEPTANCE.sub(NOT_COUNSELING),
        &["accept_not_counseling", "signature"],
    )
    .input(Signature),
    F::text(
        "accept_not_counseling_name",
        "Print Name",
        ACCEPTANCE.sub(NOT_COUNSELING),
        &["accept_not_counseling", "name"],
    ),
    F::date(
        "accept_not_counseling_date",
        "Date",
        ACCEPTANCE.sub(NOT_COUNSELING),
        &["accept_not_counseling", "date"],
    ),
];
