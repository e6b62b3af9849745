//! Shared types for the publication DOI pipeline.

mod document;
mod resource_type;
mod row;

pub use document::{
    Affiliation, Container, Contributor, Creator, DateEntry, Description, DoiAttributes,
    FundingReference, NameIdentifier, RegistryDocument, RelatedIdentifier, ResourceTypes, Subject,
    Title,
};
pub use resource_type::ResourceCategory;
pub use row::{CREATOR_SLOTS, PublicationRow, REFERENCE_SLOTS};
