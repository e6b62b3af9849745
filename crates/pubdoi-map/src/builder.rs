//! Builds the registry document for one validated row.
//!
//! No I/O: given the same row, URL, and prefix, the output is structurally
//! identical every time.

use pubdoi_model::{
    Affiliation, CREATOR_SLOTS, Container, Contributor, Creator, DateEntry, Description,
    DoiAttributes, FundingReference, NameIdentifier, PublicationRow, REFERENCE_SLOTS,
    RegistryDocument, RelatedIdentifier, ResourceCategory, ResourceTypes, Subject, Title,
};
use pubdoi_validate::extract_year;

use crate::error::MapError;

/// Build the registry document for a validated row.
///
/// `file_url` is the landing URL of the uploaded file; `prefix` is the
/// repository DOI prefix when repository verification discovered one.
pub fn build_document(
    row: &PublicationRow,
    file_url: &str,
    prefix: Option<&str>,
) -> Result<RegistryDocument, MapError> {
    let publication_date = row.trimmed("publication_date");
    let publication_year = extract_year(publication_date)
        .ok_or_else(|| MapError::NoYear(publication_date.to_string()))?;

    let publisher = opt(row, "publisher")
        .or_else(|| opt(row, "thesis_university"))
        .ok_or(MapError::NoPublisher)?;

    let raw_type = row.trimmed("resource_type");
    let types = ResourceTypes {
        resource_type_general: ResourceCategory::from_label(raw_type).as_str().to_string(),
        resource_type: raw_type.to_string(),
    };

    let attributes = DoiAttributes {
        event: "publish".to_string(),
        prefix: prefix.map(str::to_string),
        url: file_url.to_string(),
        titles: build_titles(row)?,
        creators: build_creators(row)?,
        publisher,
        publication_year,
        types,
        dates: vec![DateEntry {
            date: publication_date.to_string(),
            date_type: "Issued".to_string(),
        }],
        descriptions: build_descriptions(row),
        subjects: build_subjects(row),
        container: build_container(row),
        contributors: build_contributors(row),
        related_identifiers: build_related_identifiers(row),
        funding_references: build_funding_references(row),
        language: opt(row, "languages").map(|language| language.to_lowercase()),
    };
    Ok(RegistryDocument::new(attributes))
}

/// Non-empty trimmed cell value.
fn opt(row: &PublicationRow, column: &str) -> Option<String> {
    let value = row.trimmed(column);
    (!value.is_empty()).then(|| value.to_string())
}

fn build_titles(row: &PublicationRow) -> Result<Vec<Title>, MapError> {
    let main = opt(row, "title_main").ok_or(MapError::NoTitle)?;
    let mut titles = vec![Title {
        title: main,
        lang: opt(row, "title_main_language"),
        title_type: None,
    }];
    if let Some(translated) = opt(row, "title_translated") {
        titles.push(Title {
            title: translated,
            lang: opt(row, "title_translated_language"),
            title_type: Some("TranslatedTitle".to_string()),
        });
    }
    Ok(titles)
}

fn build_creators(row: &PublicationRow) -> Result<Vec<Creator>, MapError> {
    let mut creators = Vec::new();
    for slot in 1..=CREATOR_SLOTS {
        let name_column = PublicationRow::slot_column("creator", slot, "name");
        let Some(name) = opt(row, &name_column) else {
            continue;
        };
        let affiliation = opt(row, &PublicationRow::slot_column("creator", slot, "affiliation"))
            .map(|name| vec![Affiliation { name }])
            .unwrap_or_default();
        let name_identifiers = opt(row, &PublicationRow::slot_column("creator", slot, "orcid"))
            .map(|orcid| {
                vec![NameIdentifier {
                    name_identifier: orcid_url(&orcid),
                    name_identifier_scheme: "ORCID".to_string(),
                }]
            })
            .unwrap_or_default();
        creators.push(Creator {
            name,
            name_type: "Personal".to_string(),
            affiliation,
            name_identifiers,
            role: opt(row, &PublicationRow::slot_column("creator", slot, "role")),
        });
    }
    if creators.is_empty() {
        return Err(MapError::NoCreators);
    }
    Ok(creators)
}

/// Bare ORCID values become full `https://orcid.org/` URLs.
fn orcid_url(orcid: &str) -> String {
    if orcid.starts_with("http") {
        orcid.to_string()
    } else {
        format!("https://orcid.org/{orcid}")
    }
}

fn build_descriptions(row: &PublicationRow) -> Vec<Description> {
    let mut descriptions = Vec::new();
    if let Some(abstract_text) = opt(row, "description") {
        descriptions.push(Description {
            description: abstract_text,
            description_type: "Abstract".to_string(),
        });
    }
    let mut thesis_parts = Vec::new();
    if let Some(degree) = opt(row, "thesis_degree") {
        thesis_parts.push(format!("Degree: {degree}"));
    }
    if let Some(department) = opt(row, "thesis_department") {
        thesis_parts.push(format!("Department: {department}"));
    }
    if !thesis_parts.is_empty() {
        descriptions.push(Description {
            description: thesis_parts.join("; "),
            description_type: "Other".to_string(),
        });
    }
    descriptions
}

fn build_subjects(row: &PublicationRow) -> Vec<Subject> {
    row.get("keywords")
        .split('|')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(|keyword| Subject {
            subject: keyword.to_string(),
        })
        .collect()
}

fn build_container(row: &PublicationRow) -> Option<Container> {
    let title = opt(row, "journal_title")?;
    Some(Container {
        kind: "Journal".to_string(),
        title,
        identifier: opt(row, "journal_issn"),
        identifier_type: row.has_value("journal_issn").then(|| "ISSN".to_string()),
        volume: opt(row, "journal_volume"),
        issue: opt(row, "journal_issue"),
        first_page: opt(row, "journal_page_number"),
    })
}

fn build_contributors(row: &PublicationRow) -> Vec<Contributor> {
    opt(row, "thesis_university")
        .map(|name| {
            vec![Contributor {
                name,
                contributor_type: "HostingInstitution".to_string(),
            }]
        })
        .unwrap_or_default()
}

fn build_related_identifiers(row: &PublicationRow) -> Vec<RelatedIdentifier> {
    let mut identifiers = Vec::new();
    for slot in 1..=REFERENCE_SLOTS {
        let Some(reference) = opt(row, &format!("reference_{slot}")) else {
            continue;
        };
        identifiers.push(RelatedIdentifier {
            related_identifier_type: reference_identifier_type(&reference).to_string(),
            related_identifier: reference,
            relation_type: "References".to_string(),
        });
    }
    identifiers
}

fn reference_identifier_type(reference: &str) -> &'static str {
    if reference.starts_with("10.") || reference.contains("doi.org") {
        "DOI"
    } else {
        "URL"
    }
}

fn build_funding_references(row: &PublicationRow) -> Vec<FundingReference> {
    opt(row, "funder_1_name")
        .map(|funder_name| {
            vec![FundingReference {
                funder_name,
                award_title: opt(row, "funder_1_award_title"),
            }]
        })
        .unwrap_or_default()
}
