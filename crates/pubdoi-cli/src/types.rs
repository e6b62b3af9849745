use std::path::PathBuf;

/// Terminal state of one row after a pipeline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row already carried both a file URL and an identifier, or was blank.
    Skipped,
    /// Row gained a file URL, an identifier, or both.
    Updated,
    /// Row passed validation during a dry run; nothing was written.
    Ready,
    /// Required metadata was missing or malformed.
    ValidationFailed,
    /// The object store rejected the upload or the local file was absent.
    UploadFailed,
    /// The registry rejected the document or was unreachable.
    RegisterFailed,
}

impl RowOutcome {
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Self::ValidationFailed | Self::UploadFailed | Self::RegisterFailed
        )
    }
}

/// One failed row, kept for the end-of-run report.
#[derive(Debug, Clone)]
pub struct RowFailure {
    /// 1-based line number in the CSV, counting the header line.
    pub row_number: usize,
    /// Title or file name identifying the publication.
    pub label: String,
    /// Pipeline stage that failed: validate, upload, map, or register.
    pub stage: &'static str,
    pub reason: String,
}

/// Aggregate result of one batch pass.
#[derive(Debug)]
pub struct ProcessResult {
    pub csv_path: PathBuf,
    /// Rows that gained a file URL or identifier this pass.
    pub updated: usize,
    /// Rows that would be processed, counted only during a dry run.
    pub ready: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<RowFailure>,
    pub dry_run: bool,
}

impl ProcessResult {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
