//! Tests for row validation.

use pubdoi_model::PublicationRow;
use pubdoi_validate::{ValidationResult, validate_row};

fn complete_row() -> PublicationRow {
    let mut row = PublicationRow::new();
    row.insert("resource_type", "Dissertation");
    row.insert("title_main", "Study X");
    row.insert("creator_1_name", "A. Smith");
    row.insert("publication_date", "2021-05-01");
    row.insert("thesis_university", "Example Univ");
    row.insert("file_name", "study.pdf");
    row
}

#[test]
fn complete_row_is_valid() {
    assert_eq!(validate_row(&complete_row()), ValidationResult::Valid);
}

#[test]
fn accumulates_every_missing_field() {
    let row = PublicationRow::new();
    let result = validate_row(&row);
    let reasons = result.reasons();
    assert!(reasons.contains(&"resource_type".to_string()));
    assert!(reasons.contains(&"title_main".to_string()));
    assert!(reasons.contains(&"creator_1_name".to_string()));
    assert!(reasons.contains(&"file_name".to_string()));
    assert!(reasons.contains(&"publication_date".to_string()));
    assert!(reasons.contains(&"publisher (or thesis_university)".to_string()));
    assert_eq!(reasons.len(), 6);
}

#[test]
fn whitespace_only_values_count_as_missing() {
    let mut row = complete_row();
    row.insert("title_main", "   ");
    let result = validate_row(&row);
    assert_eq!(result.reasons(), ["title_main"]);
}

#[test]
fn publisher_requirement_is_satisfied_by_either_column() {
    let mut row = complete_row();
    row.insert("thesis_university", "");
    row.insert("publisher", "Example Press");
    assert!(validate_row(&row).is_valid());

    row.insert("publisher", "");
    let result = validate_row(&row);
    assert_eq!(result.reasons(), ["publisher (or thesis_university)"]);
}

#[test]
fn date_without_extractable_year_is_invalid() {
    let mut row = complete_row();
    row.insert("publication_date", "no-date-here");
    let result = validate_row(&row);
    assert_eq!(result.reasons(), ["publication_date (no 4-digit year)"]);
}

#[test]
fn any_date_ordering_with_a_year_token_passes() {
    for date in ["30-Jul-2022", "2022-07-30", "Jul 30 2022", "2022"] {
        let mut row = complete_row();
        row.insert("publication_date", date);
        assert!(validate_row(&row).is_valid(), "date {date:?} should pass");
    }
}
