//! Required-field checks for one publication row.

use pubdoi_model::PublicationRow;

use crate::year::extract_year;

/// Columns that must be non-empty before a row can be processed.
const REQUIRED_COLUMNS: &[&str] = &["resource_type", "title_main", "creator_1_name", "file_name"];

/// Outcome of validating one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Names of every missing or invalid field, in check order.
    Invalid(Vec<String>),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failure reasons; empty for a valid row.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        match self {
            Self::Valid => &[],
            Self::Invalid(reasons) => reasons,
        }
    }
}

/// Check the required-field set for one row.
///
/// Pure reporting: all failing checks accumulate so the operator sees every
/// problem at once. Never panics on missing columns.
#[must_use]
pub fn validate_row(row: &PublicationRow) -> ValidationResult {
    let mut missing = Vec::new();
    for column in REQUIRED_COLUMNS {
        if !row.has_value(column) {
            missing.push((*column).to_string());
        }
    }
    if !row.has_value("publication_date") {
        missing.push("publication_date".to_string());
    } else if extract_year(row.trimmed("publication_date")).is_none() {
        missing.push("publication_date (no 4-digit year)".to_string());
    }
    if !row.has_value("publisher") && !row.has_value("thesis_university") {
        missing.push("publisher (or thesis_university)".to_string());
    }
    if missing.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(missing)
    }
}
