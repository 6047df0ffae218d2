//! Option sets for the client record's enum fields.
//!
//! Single-choice sets keep their established integer values. Multi-choice
//! sets use text values and store as sequences; the old bit-flag integers
//! are not accepted.

use intake_schema::node::EnumOption;

//
// single choice
//

pub const GENDER: &[EnumOption] = &[
    EnumOption::int("Female", 1),
    EnumOption::int("Male", 2),
    EnumOption::int("Trans", 4),
];

pub const PHONE_TYPE: &[EnumOption] = &[
    EnumOption::int("Personal", 1),
    EnumOption::int("Shared", 2),
    EnumOption::int("Home", 4),
    EnumOption::int("Work", 8),
    EnumOption::int("Mobile", 16),
    EnumOption::int("Land line", 32),
];

pub const CITIZENSHIP: &[EnumOption] = &[
    EnumOption::int("Us citizen", 1),
    EnumOption::int("Green card", 2),
    EnumOption::int("Visa", 3),
    EnumOption::int("Undocumented", 4),
];

pub const MARITAL_STATUS: &[EnumOption] = &[
    EnumOption::int("Single", 1),
    EnumOption::int("Married", 2),
    EnumOption::int("Separated", 3),
    EnumOption::int("Divorced", 4),
    EnumOption::int("Widowed", 5),
];

pub const EDUCATION_LEVEL: &[EnumOption] = &[
    EnumOption::int("Less than 12th grade", 1),
    EnumOption::int("High school", 2),
    EnumOption::int("Ged", 3),
    EnumOption::int("Some college", 4),
    EnumOption::int("College aa", 5),
    EnumOption::int("College ba", 6),
    EnumOption::int("College bs", 7),
    EnumOption::int("Some trade school", 8),
    EnumOption::int("Trade school certificate", 9),
];

//
// multiple choice
//

pub const EMPLOYMENT_STATUS: &[EnumOption] = &[
    EnumOption::text("self-employed", "self_employed"),
    EnumOption::text("under-employed", "under_employed"),
    EnumOption::text("full-time", "full_time"),
    EnumOption::text("part-time", "part_time"),
    EnumOption::text("seasonal", "seasonal"),
];

pub const LOST_INCOME_REASON: &[EnumOption] = &[
    EnumOption::text("Lost my job", "lost_self_job"),
    EnumOption::text("Spouse/Partner lost job", "lost_spouse_job"),
    EnumOption::text("Loss/Lack of child support", "lost_child_support"),
    EnumOption::text("Loss of government subsidy", "lost_gov_subsidy"),
];

pub const ETHNICITY: &[EnumOption] = &[
    EnumOption::text("White", "white"),
    EnumOption::text("Black/African American", "black"),
    EnumOption::text("Asian", "asian"),
    EnumOption::text("American Indian/Alaskan Native", "native"),
    EnumOption::text("Native Hawaiian/Other Pacific Islander", "pacific"),
];

pub const HOUSEHOLD_ISSUES: &[EnumOption] = &[
    EnumOption::text("are you responsible for the bills", "responsible_bills"),
    EnumOption::text("female headed household", "female_headed"),
    EnumOption::text("single parent", "single_parent"),
];

pub const DISABILITIES: &[EnumOption] = &[
    EnumOption::text("Abused child", "abused_child"),
    EnumOption::text("Neglected child", "neglected_child"),
    EnumOption::text("Severe Mental Illness", "severe_mental"),
    EnumOption::text("Developmental Disabilities", "developmental"),
    EnumOption::text("Physical Disabilities", "physical"),
    EnumOption::text("Victim of Domestic Violence", "domestic_violence"),
    EnumOption::text("Elderly", "elderly"),
    EnumOption::text("Frail elderly", "frail"),
    EnumOption::text("Alcohol and drug abuse", "drug_alcohol_abuse"),
    EnumOption::text("Living with HIV/AIDS", "hiv_aids"),
    EnumOption::text("chronically homeless", "homeless_chronic"),
    EnumOption::text("currently homeless", "homeless_currently"),
];

pub const MILITARY_BRANCH: &[EnumOption] = &[
    EnumOption::text("Air Force", "air_force"),
    EnumOption::text("Army", "army"),
    EnumOption::text("Coast Guard", "coast_guard"),
    EnumOption::text("Marines", "marines"),
    EnumOption::text("National Guard", "national_guard"),
    EnumOption::text("Navy", "navy"),
];

pub const MILITARY_STATUS: &[EnumOption] = &[
    EnumOption::text("Active", "active"),
    EnumOption::text("Injured", "injured"),
    EnumOption::text("Retired", "retired"),
    EnumOption::text("Reserves", "reserves"),
    EnumOption::text("Spouse", "spouse"),
];
