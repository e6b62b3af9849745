//! Publication year extraction from free-form date strings.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// A standalone 4-digit year token in the plausible range 1000-2999.
static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[12][0-9]{3}\b").expect("valid year regex"));

/// Date layouts seen in the metadata tables, tried before the token scan.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%d-%m-%Y"];

/// Extract a 4-digit publication year from a date string.
///
/// Known date layouts are parsed first; anything else falls back to
/// scanning for a plausible 4-digit year token, so day/month/year ordering
/// does not matter. Returns `None` when no such year is present.
#[must_use]
pub fn extract_year(date: &str) -> Option<i32> {
    let date = date.trim();
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, format) {
            let year = parsed.year();
            if (1000..=2999).contains(&year) {
                return Some(year);
            }
        }
    }
    YEAR_TOKEN
        .find(date)
        .and_then(|token| token.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_common_layouts() {
        assert_eq!(extract_year("2022-07-30"), Some(2022));
        assert_eq!(extract_year("30-Jul-2022"), Some(2022));
        assert_eq!(extract_year("30-07-2022"), Some(2022));
        assert_eq!(extract_year("  2021-05-01 "), Some(2021));
    }

    #[test]
    fn falls_back_to_token_scan() {
        assert_eq!(extract_year("2022"), Some(2022));
        assert_eq!(extract_year("July 2019, first edition"), Some(2019));
        assert_eq!(extract_year("1999/12"), Some(1999));
    }

    #[test]
    fn rejects_strings_without_a_plausible_year() {
        assert_eq!(extract_year("no-date-here"), None);
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("3022-01-01"), None);
        assert_eq!(extract_year("123"), None);
        assert_eq!(extract_year("abc2022"), None);
    }

    proptest! {
        #[test]
        fn finds_embedded_plausible_years(
            year in 1000i32..=2999,
            prefix in "([a-z]{1,6}[ /-]){0,2}",
            suffix in "([ /-][a-z]{1,6}){0,2}",
        ) {
            let date = format!("{prefix}{year}{suffix}");
            prop_assert_eq!(extract_year(&date), Some(year));
        }
    }
}
