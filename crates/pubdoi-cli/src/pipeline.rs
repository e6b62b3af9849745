//! Per-row processing pipeline.
//!
//! Each row moves through validate, upload, map, and register in order.
//! A failure stops that row and is recorded; the pass continues with the
//! next row so one bad record never blocks the batch.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use pubdoi_ingest::MetadataTable;
use pubdoi_map::build_document;
use pubdoi_model::PublicationRow;
use pubdoi_registry::IdentifierRegistry;
use pubdoi_store::ObjectStore;
use pubdoi_validate::{ValidationResult, validate_row};

use crate::types::{ProcessResult, RowFailure, RowOutcome};

/// Shared services and settings for one batch pass.
pub struct PipelineContext<'a> {
    pub store: &'a dyn ObjectStore,
    pub registry: &'a dyn IdentifierRegistry,
    /// Directory holding the local files named by `file_name`.
    pub data_dir: &'a Path,
    /// DOI prefix the repository mints under, when known.
    pub prefix: Option<&'a str>,
    /// Validate and report without uploading, registering, or writing.
    pub dry_run: bool,
}

/// Run every row of the table through the pipeline.
///
/// Successful uploads and registrations are written into the table's
/// `file_url` and `doi` columns as they happen.
pub fn process_table(
    ctx: &PipelineContext<'_>,
    table: &mut MetadataTable,
    csv_path: &Path,
) -> ProcessResult {
    let mut result = ProcessResult {
        csv_path: csv_path.to_path_buf(),
        updated: 0,
        ready: 0,
        skipped: 0,
        failed: 0,
        failures: Vec::new(),
        dry_run: ctx.dry_run,
    };
    for index in 0..table.row_count() {
        match process_row(ctx, table, index, &mut result.failures) {
            RowOutcome::Skipped => result.skipped += 1,
            RowOutcome::Updated => result.updated += 1,
            RowOutcome::Ready => result.ready += 1,
            outcome if outcome.is_failure() => result.failed += 1,
            _ => {}
        }
    }
    info!(
        updated = result.updated,
        ready = result.ready,
        skipped = result.skipped,
        failed = result.failed,
        "batch pass complete"
    );
    result
}

/// Process one row, returning its terminal state.
pub fn process_row(
    ctx: &PipelineContext<'_>,
    table: &mut MetadataTable,
    index: usize,
    failures: &mut Vec<RowFailure>,
) -> RowOutcome {
    let row = table.publication_row(index);
    // Line 1 is the header, so data row 0 sits on line 2.
    let row_number = index + 2;
    if row.is_blank() {
        debug!(row = row_number, "blank row skipped");
        return RowOutcome::Skipped;
    }
    let has_url = row.has_value("file_url");
    let has_doi = row.has_value("doi");
    if has_url && has_doi {
        debug!(row = row_number, "already uploaded and registered");
        return RowOutcome::Skipped;
    }

    let label = row_label(&row);
    let span = info_span!("row", number = row_number, publication = %label);
    let _guard = span.enter();

    if let ValidationResult::Invalid(reasons) = validate_row(&row) {
        let reason = reasons.join("; ");
        warn!(%reason, "row failed validation");
        failures.push(RowFailure {
            row_number,
            label,
            stage: "validate",
            reason,
        });
        return RowOutcome::ValidationFailed;
    }

    if ctx.dry_run {
        info!(
            needs_upload = !has_url,
            needs_registration = !has_doi,
            "dry run: row is ready"
        );
        return RowOutcome::Ready;
    }

    let file_url = if has_url {
        row.trimmed("file_url").to_string()
    } else {
        let file_name = row.trimmed("file_name");
        let local_path = ctx.data_dir.join(file_name);
        match ctx.store.upload(&local_path, file_name) {
            Ok(url) => {
                table.set_field(index, "file_url", url.clone());
                url
            }
            Err(error) => {
                warn!(%error, "upload failed");
                failures.push(RowFailure {
                    row_number,
                    label,
                    stage: "upload",
                    reason: error.to_string(),
                });
                return RowOutcome::UploadFailed;
            }
        }
    };

    if has_doi {
        // Identifier minted on an earlier pass; only the URL was missing.
        return RowOutcome::Updated;
    }

    let document = match build_document(&row, &file_url, ctx.prefix) {
        Ok(document) => document,
        Err(error) => {
            warn!(%error, "could not build metadata document");
            failures.push(RowFailure {
                row_number,
                label,
                stage: "map",
                reason: error.to_string(),
            });
            return RowOutcome::ValidationFailed;
        }
    };

    match ctx.registry.register(&document) {
        Ok(doi) => {
            table.set_field(index, "doi", doi);
            RowOutcome::Updated
        }
        Err(error) => {
            warn!(%error, "registration failed");
            failures.push(RowFailure {
                row_number,
                label,
                stage: "register",
                reason: error.to_string(),
            });
            RowOutcome::RegisterFailed
        }
    }
}

fn row_label(row: &PublicationRow) -> String {
    for column in ["title_main", "file_name"] {
        if row.has_value(column) {
            return row.trimmed(column).to_string();
        }
    }
    "(untitled)".to_string()
}
