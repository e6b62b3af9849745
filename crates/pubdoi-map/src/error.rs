//! Error types for document construction.

use thiserror::Error;

/// Errors from building a registry document.
///
/// The validator normally rejects rows before these can occur; they guard
/// the document invariants when the mapper is used on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// `title_main` is empty.
    #[error("missing required field 'title_main'")]
    NoTitle,

    /// No creator slot is populated.
    #[error("at least one creator (creator_1_name) is required")]
    NoCreators,

    /// Neither `publisher` nor `thesis_university` is populated.
    #[error("missing required field 'publisher' (or 'thesis_university')")]
    NoPublisher,

    /// No 4-digit year could be extracted from `publication_date`.
    #[error("could not extract a publication year from {0:?}")]
    NoYear(String),
}
