//! Calendar dates on the wire (`YYYY-MM-DD`) and in flattened storage
//! (proleptic Gregorian ordinal, 0001-01-01 = 1).

use std::sync::OnceLock;
use time::{
    Date, Month,
    error::InvalidFormatDescription,
    format_description::{self, FormatItem},
};

static FORMAT: OnceLock<Result<Vec<FormatItem<'static>>, InvalidFormatDescription>> =
    OnceLock::new();

const ORDINAL_EPOCH: Date = match Date::from_calendar_date(1, Month::January, 1) {
    Ok(d) => d,
    Err(_) => unreachable!(),
};

/// Parse an ISO `YYYY-MM-DD` date. Components are range-checked, never
/// clamped; signed years and years before 0001 are rejected.
#[must_use]
pub fn parse_iso(raw: &str) -> Option<Date> {
    if raw.len() != 10 || !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let format = FORMAT
        .get_or_init(|| format_description::parse("[year]-[month]-[day]"))
        .as_ref()
        .ok()?;
    let date = Date::parse(raw, format).ok()?;

    (date.year() >= 1).then_some(date)
}

#[must_use]
pub fn format_iso(date: Date) -> String {
    let month: u8 = date.month().into();

    format!("{:04}-{month:02}-{:02}", date.year(), date.day())
}

/// Day count with 0001-01-01 as day 1.
#[must_use]
pub fn to_ordinal(date: Date) -> i64 {
    i64::from(date.to_julian_day() - ORDINAL_EPOCH.to_julian_day()) + 1
}

/// Inverse of [`to_ordinal`]; `None` for 0, negatives, and out-of-range days.
#[must_use]
pub fn from_ordinal(ordinal: i64) -> Option<Date> {
    if ordinal < 1 {
        return None;
    }

    let julian = i64::from(ORDINAL_EPOCH.to_julian_day()) + ordinal - 1;

    Date::from_julian_day(i32::try_from(julian).ok()?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: Month, d: u8) -> Date {
        Date::from_calendar_date(y, m, d).expect("valid test date")
    }

    #[test]
    fn parses_well_formed_dates() {
        assert_eq!(parse_iso("2024-02-29"), Some(ymd(2024, Month::February, 29)));
        assert_eq!(parse_iso("0001-01-01"), Some(ORDINAL_EPOCH));
        assert_eq!(parse_iso("9999-12-31"), Some(ymd(9999, Month::December, 31)));
    }

    #[test]
    fn repeated_parses_share_the_cached_format() {
        assert_eq!(parse_iso("1815-12-10"), Some(ymd(1815, Month::December, 10)));
        assert_eq!(parse_iso("1815-12-10"), parse_iso("1815-12-10"));
        assert!(FORMAT.get().is_some_and(Result::is_ok));
    }

    #[test]
    fn rejects_bad_shapes_and_ranges() {
        for raw in [
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-01-32",
            "2024-1-05",
            "24-01-05",
            "2024/01/05",
            "2024-01-05T00:00",
            "+024-01-05",
            "-024-01-05",
            "+2024-01-05",
            "2024-01-5 ",
            "2024-0a-05",
            "0000-06-01",
            "",
        ] {
            assert_eq!(parse_iso(raw), None, "{raw} should not parse");
        }
    }

    #[test]
    fn ordinal_matches_established_day_numbering() {
        assert_eq!(to_ordinal(ORDINAL_EPOCH), 1);
        assert_eq!(to_ordinal(ymd(2000, Month::January, 1)), 730_120);
        assert_eq!(from_ordinal(730_120), Some(ymd(2000, Month::January, 1)));
        assert_eq!(from_ordinal(0), None);
        assert_eq!(from_ordinal(-5), None);
    }

    #[test]
    fn format_pads_components() {
        assert_eq!(format_iso(ymd(987, Month::March, 4)), "0987-03-04");
    }
}
