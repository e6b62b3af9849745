//! Publications metadata table ingestion and write-back.

mod error;
mod table;

pub use error::{IngestError, Result};
pub use table::MetadataTable;
