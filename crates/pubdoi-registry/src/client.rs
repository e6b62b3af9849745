//! Blocking HTTP client for the DataCite REST API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{Value, json};
use tracing::{debug, info};

use pubdoi_model::RegistryDocument;

use crate::IdentifierRegistry;
use crate::error::RegistryError;
use crate::response::{parse_error_messages, parse_identifier, parse_repository_info, parse_state};

/// HTTP request timeout for registry calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type the JSON:API endpoints require.
const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Basic-auth pair for the registry account.
#[derive(Debug, Clone)]
pub struct RegistryCredentials {
    pub username: String,
    pub password: String,
}

/// Repository details returned by [`DataCiteClient::verify_repository`].
#[derive(Debug, Clone)]
pub struct RepositoryInfo {
    pub name: String,
    /// DOI prefix assigned to the repository, when one is configured.
    pub prefix: Option<String>,
}

/// Client scoped to one repository on one API host.
pub struct DataCiteClient {
    base_url: String,
    repository_id: String,
    credentials: RegistryCredentials,
    client: Client,
}

impl DataCiteClient {
    pub fn new(
        base_url: impl Into<String>,
        repository_id: impl Into<String>,
        credentials: RegistryCredentials,
    ) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RegistryError::Unreachable(err.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            repository_id: repository_id.into(),
            credentials,
            client,
        })
    }

    fn dois_url(&self) -> String {
        format!(
            "{}/repositories/{}/dois",
            self.base_url, self.repository_id
        )
    }

    fn repository_url(&self) -> String {
        format!("{}/repositories/{}", self.base_url, self.repository_id)
    }

    /// Confirm the credentials can see the repository and recover its
    /// DOI prefix. Called once before a batch run.
    pub fn verify_repository(&self) -> Result<RepositoryInfo, RegistryError> {
        let url = self.repository_url();
        debug!(%url, "verifying repository access");
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header("Accept", JSON_API_CONTENT_TYPE)
            .send()
            .map_err(|err| RegistryError::Unreachable(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|err| RegistryError::Unreachable(err.to_string()))?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|_| RegistryError::InvalidResponse(truncate(&text)))?;

        if !status.is_success() {
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                messages: parse_error_messages(&body),
            });
        }
        let info = parse_repository_info(&body);
        info!(
            repository = %info.name,
            prefix = info.prefix.as_deref().unwrap_or("none"),
            "repository verified"
        );
        Ok(info)
    }
}

impl IdentifierRegistry for DataCiteClient {
    fn register(&self, document: &RegistryDocument) -> Result<String, RegistryError> {
        let url = self.dois_url();
        let envelope = json!({ "data": document });
        debug!(%url, "submitting metadata document");
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header("Content-Type", JSON_API_CONTENT_TYPE)
            .json(&envelope)
            .send()
            .map_err(|err| RegistryError::Unreachable(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|err| RegistryError::Unreachable(err.to_string()))?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|_| RegistryError::InvalidResponse(truncate(&text)))?;

        if !status.is_success() {
            return Err(RegistryError::Rejected {
                status: status.as_u16(),
                messages: parse_error_messages(&body),
            });
        }
        let identifier = parse_identifier(&body)
            .ok_or_else(|| RegistryError::InvalidResponse(truncate(&text)))?;
        info!(
            doi = %identifier,
            state = parse_state(&body).unwrap_or("unknown"),
            "identifier registered"
        );
        Ok(identifier)
    }
}

/// Cap stray response bodies quoted in error messages.
fn truncate(text: &str) -> String {
    const LIMIT: usize = 500;
    if text.len() <= LIMIT {
        return text.to_string();
    }
    let mut end = LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DataCiteClient {
        DataCiteClient::new(
            "https://api.test.datacite.org/",
            "demo.repo",
            RegistryCredentials {
                username: "demo.repo".to_string(),
                password: "secret".to_string(),
            },
        )
        .expect("build client")
    }

    #[test]
    fn dois_url_is_scoped_to_the_repository() {
        assert_eq!(
            client().dois_url(),
            "https://api.test.datacite.org/repositories/demo.repo/dois"
        );
    }

    #[test]
    fn repository_url_strips_trailing_slash_from_base() {
        assert_eq!(
            client().repository_url(),
            "https://api.test.datacite.org/repositories/demo.repo"
        );
    }

    #[test]
    fn truncate_caps_long_bodies_at_a_char_boundary() {
        let short = "plain text";
        assert_eq!(truncate(short), short);
        let long = "é".repeat(400);
        let capped = truncate(&long);
        assert!(capped.ends_with("..."));
        assert!(capped.len() <= 503);
    }
}
