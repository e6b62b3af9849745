//! Row model for the publications metadata table.

use std::collections::BTreeMap;

/// Number of numbered creator slots (`creator_1_*` .. `creator_3_*`).
pub const CREATOR_SLOTS: usize = 3;

/// Number of numbered reference slots (`reference_1` .. `reference_3`).
pub const REFERENCE_SLOTS: usize = 3;

/// One record of the publications table: column name to raw cell value.
///
/// Cell values are kept exactly as read; trimming happens inside the
/// predicates so that untouched rows round-trip byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationRow {
    values: BTreeMap<String, String>,
}

impl PublicationRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Raw cell value; empty string when the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Cell value with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).trim()
    }

    /// True when the column holds a non-whitespace value.
    #[must_use]
    pub fn has_value(&self, column: &str) -> bool {
        !self.trimmed(column).is_empty()
    }

    /// True when every cell in the row is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }

    /// Column name for a numbered slot, e.g. `slot_column("creator", 2, "name")`.
    #[must_use]
    pub fn slot_column(group: &str, index: usize, field: &str) -> String {
        format!("{group}_{index}_{field}")
    }
}

impl FromIterator<(String, String)> for PublicationRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
