//! CSV-backed metadata table with named-column access.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use pubdoi_model::PublicationRow;

use crate::error::{IngestError, Result};

/// In-memory view of the publications metadata CSV.
///
/// Column order and unknown columns are preserved as read. Cell values are
/// never normalized: a row the pipeline does not touch is written back
/// byte-identical.
#[derive(Debug, Clone)]
pub struct MetadataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MetadataTable {
    /// Read a CSV file into a table.
    ///
    /// The first record is the header row; only a leading BOM on its first
    /// cell is stripped. Short records are padded to the header width so
    /// every row has a cell for every column. Records wider than the header
    /// are rejected: writing them back would drop the extra cells.
    pub fn read_csv(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| IngestError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let mut records = reader.records();
        let header_record = match records.next() {
            Some(record) => record.map_err(|source| IngestError::Read {
                path: path.to_path_buf(),
                source,
            })?,
            None => {
                return Err(IngestError::MissingHeader {
                    path: path.to_path_buf(),
                });
            }
        };
        let mut headers: Vec<String> = header_record.iter().map(str::to_string).collect();
        if let Some(first) = headers.first_mut()
            && let Some(stripped) = first.strip_prefix('\u{feff}')
        {
            *first = stripped.to_string();
        }
        let mut rows = Vec::new();
        for (index, record) in records.enumerate() {
            let record = record.map_err(|source| IngestError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.len() > headers.len() {
                return Err(IngestError::ExtraCells {
                    path: path.to_path_buf(),
                    line: index + 2,
                    cells: row.len(),
                    columns: headers.len(),
                });
            }
            row.resize(headers.len(), String::new());
            rows.push(row);
        }
        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "metadata table loaded"
        );
        Ok(Self { headers, rows })
    }

    /// Serialize the full table, overwriting `path`.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let write_err = |source: csv::Error| IngestError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = WriterBuilder::new().from_path(path).map_err(write_err)?;
        writer.write_record(&self.headers).map_err(write_err)?;
        for row in &self.rows {
            writer.write_record(row).map_err(write_err)?;
        }
        writer
            .flush()
            .map_err(|source| write_err(csv::Error::from(source)))?;
        debug!(path = %path.display(), rows = self.rows.len(), "metadata table written");
        Ok(())
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of `name`, appending an empty column when the input lacks it.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// Raw cell value; empty string when the column is absent.
    #[must_use]
    pub fn field(&self, row: usize, column: &str) -> &str {
        self.column_index(column)
            .and_then(|index| self.rows.get(row).and_then(|cells| cells.get(index)))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set one cell, creating the column if needed.
    pub fn set_field(&mut self, row: usize, column: &str, value: impl Into<String>) {
        let index = self.ensure_column(column);
        if let Some(cells) = self.rows.get_mut(row) {
            cells[index] = value.into();
        }
    }

    /// Snapshot one row as a column-name to value mapping.
    #[must_use]
    pub fn publication_row(&self, row: usize) -> PublicationRow {
        let cells = self.rows.get(row);
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = cells
                    .and_then(|row| row.get(index))
                    .map(String::as_str)
                    .unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect()
    }
}
