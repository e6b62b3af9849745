//! DataCite REST API client.
//!
//! The pipeline submits documents through the [`IdentifierRegistry`]
//! trait; [`DataCiteClient`] is the blocking HTTP implementation.

mod client;
mod error;
mod response;

pub use client::{DataCiteClient, RegistryCredentials, RepositoryInfo};
pub use error::RegistryError;

use pubdoi_model::RegistryDocument;

/// Identifier-creation interface to the metadata registry.
pub trait IdentifierRegistry {
    /// Submit one document, returning the assigned identifier.
    fn register(&self, document: &RegistryDocument) -> Result<String, RegistryError>;
}
