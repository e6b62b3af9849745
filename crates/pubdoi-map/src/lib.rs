//! Pure transformation from publication rows to registry documents.

mod builder;
mod error;

pub use builder::build_document;
pub use error::MapError;
