//! Row validation for the publication DOI pipeline.

mod rules;
mod year;

pub use rules::{ValidationResult, validate_row};
pub use year::extract_year;
