//! Parsing helpers for JSON:API response payloads.

use serde_json::Value;

use crate::client::RepositoryInfo;

/// Assigned identifier from a creation response (`data.id`).
pub(crate) fn parse_identifier(body: &Value) -> Option<String> {
    body.get("data")?.get("id")?.as_str().map(str::to_string)
}

/// Lifecycle state reported for a newly minted identifier, if present.
pub(crate) fn parse_state(body: &Value) -> Option<&str> {
    body.get("data")?
        .get("attributes")?
        .get("state")?
        .as_str()
}

/// Human-readable messages from a JSON:API `errors` array.
///
/// Each error object carries a `title` and optionally a `source.pointer`
/// naming the offending field.
pub(crate) fn parse_error_messages(body: &Value) -> Vec<String> {
    let Some(errors) = body.get("errors").and_then(Value::as_array) else {
        return Vec::new();
    };
    errors
        .iter()
        .filter_map(|error| {
            let text = error
                .get("detail")
                .or_else(|| error.get("title"))?
                .as_str()?;
            let pointer = error
                .get("source")
                .and_then(|source| source.get("pointer"))
                .and_then(Value::as_str);
            Some(match pointer {
                Some(pointer) => format!("{pointer}: {text}"),
                None => text.to_string(),
            })
        })
        .collect()
}

/// Repository name and DOI prefix from a repository lookup response.
///
/// The prefix lives either directly in the attributes or as the first
/// entry of the `prefixes` relationship, depending on API version.
pub(crate) fn parse_repository_info(body: &Value) -> RepositoryInfo {
    let data = body.get("data");
    let name = data
        .and_then(|data| data.get("attributes"))
        .and_then(|attributes| attributes.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("(unnamed repository)")
        .to_string();
    let prefix = data
        .and_then(|data| data.get("attributes"))
        .and_then(|attributes| attributes.get("prefix"))
        .and_then(Value::as_str)
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string)
        .or_else(|| {
            data.and_then(|data| data.get("relationships"))
                .and_then(|relationships| relationships.get("prefixes"))
                .and_then(|prefixes| prefixes.get("data"))
                .and_then(Value::as_array)
                .and_then(|entries| entries.first())
                .and_then(|entry| entry.get("id"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });
    RepositoryInfo { name, prefix }
}
