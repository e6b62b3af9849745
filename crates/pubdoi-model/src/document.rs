//! DataCite JSON-API document types.
//!
//! Mirrors the subset of the DataCite REST schema this pipeline produces.
//! Optional blocks are skipped during serialization when empty so the
//! request body only carries populated metadata.

use serde::Serialize;

/// Resource object submitted under `data` in the JSON-API envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryDocument {
    #[serde(rename = "type")]
    pub resource: &'static str,
    pub attributes: DoiAttributes,
}

impl RegistryDocument {
    #[must_use]
    pub fn new(attributes: DoiAttributes) -> Self {
        Self {
            resource: "dois",
            attributes,
        }
    }
}

/// DOI attributes block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoiAttributes {
    /// `publish` mints a findable DOI rather than a draft.
    pub event: String,
    /// Repository DOI prefix, when known from repository verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Landing URL of the uploaded file.
    pub url: String,
    pub titles: Vec<Title>,
    pub creators: Vec<Creator>,
    pub publisher: String,
    pub publication_year: i32,
    pub types: ResourceTypes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<DateEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_identifiers: Vec<RelatedIdentifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub funding_references: Vec<FundingReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    pub name_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affiliation: Vec<Affiliation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name_identifiers: Vec<NameIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affiliation {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameIdentifier {
    pub name_identifier: String,
    pub name_identifier_scheme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTypes {
    pub resource_type_general: String,
    pub resource_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateEntry {
    pub date: String,
    pub date_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    pub description: String,
    pub description_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub subject: String,
}

/// Container block for serial publications (journal articles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    pub contributor_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedIdentifier {
    pub related_identifier: String,
    pub related_identifier_type: String,
    pub relation_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingReference {
    pub funder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_title: Option<String>,
}
