//! Error types for metadata table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the metadata table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse the CSV file.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write the CSV file.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file has no header row: {}", path.display())]
    MissingHeader { path: PathBuf },

    /// A record carries more cells than the header has columns.
    ///
    /// Writing such a row back would drop the extra cells, so the file is
    /// rejected up front instead.
    #[error(
        "line {line} of {} has {cells} cells but the header has {columns} columns",
        path.display()
    )]
    ExtraCells {
        path: PathBuf,
        /// 1-based line number, counting the header line.
        line: usize,
        cells: usize,
        columns: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_file() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/publications_metadata.csv"),
        };
        assert_eq!(
            err.to_string(),
            "CSV file not found: /data/publications_metadata.csv"
        );
    }
}
