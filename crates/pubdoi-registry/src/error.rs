//! Error types for registry operations.

use thiserror::Error;

/// Errors from identifier registration and repository verification.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry returned a non-success status.
    #[error("registry rejected the request ({status}): {}", .messages.join("; "))]
    Rejected {
        status: u16,
        /// Field-level messages from the error payload, when available.
        messages: Vec<String>,
    },

    /// Transport-level failure; retryable on a later run.
    #[error("registry unreachable: {0}")]
    Unreachable(String),

    /// A success status with an unparseable body.
    #[error("unexpected registry response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_joins_messages() {
        let err = RegistryError::Rejected {
            status: 422,
            messages: vec![
                "publisher can't be blank".to_string(),
                "publicationYear is invalid".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "registry rejected the request (422): publisher can't be blank; publicationYear is invalid"
        );
    }
}
