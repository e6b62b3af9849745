//! Environment-backed runtime configuration.
//!
//! Credentials are read from the process environment, with a `.env` file
//! loaded first when one exists alongside the working directory.

use thiserror::Error;

/// Default registry host; the production host must be set explicitly.
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://api.test.datacite.org";

/// Default bucket region when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Object store settings and credentials.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Registry endpoint and account settings.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub repository_id: String,
    pub username: String,
    pub password: String,
}

/// Complete runtime configuration for a batch run.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub registry: RegistryConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),
}

impl Config {
    /// Load configuration from the environment, reading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every absent variable at
    /// once, so a fresh setup can be fixed in one pass.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let access_key_id = required(&lookup, "AWS_ACCESS_KEY_ID", &mut missing);
        let secret_access_key = required(&lookup, "AWS_SECRET_ACCESS_KEY", &mut missing);
        let bucket = required(&lookup, "S3_BUCKET_NAME", &mut missing);
        let region =
            optional(&lookup, "AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let repository_id = required(&lookup, "DATACITE_REPOSITORY_ID", &mut missing);
        let base_url = optional(&lookup, "DATACITE_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_REGISTRY_BASE_URL.to_string());

        // A repository-level password signs in as the repository itself.
        // Otherwise fall back to a personal account pair.
        let (username, password) = match optional(&lookup, "DATACITE_REPOSITORY_PASSWORD") {
            Some(password) => (repository_id.clone(), password),
            None => match (
                optional(&lookup, "DATACITE_USERNAME"),
                optional(&lookup, "DATACITE_PASSWORD"),
            ) {
                (Some(username), Some(password)) => (username, password),
                _ => {
                    missing.push(
                        "DATACITE_REPOSITORY_PASSWORD (or DATACITE_USERNAME and DATACITE_PASSWORD)"
                            .to_string(),
                    );
                    (String::new(), String::new())
                }
            },
        };

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        Ok(Self {
            store: StoreConfig {
                bucket,
                region,
                access_key_id,
                secret_access_key,
            },
            registry: RegistryConfig {
                base_url,
                repository_id,
                username,
                password,
            },
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    missing: &mut Vec<String>,
) -> String {
    match optional(lookup, name) {
        Some(value) => value,
        None => {
            missing.push(name.to_string());
            String::new()
        }
    }
}

/// Empty and whitespace-only values count as unset.
fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}
