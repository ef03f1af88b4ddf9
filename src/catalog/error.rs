//! Error types for the catalog pipeline.

use thiserror::Error;

/// Errors that can occur while fetching or normalizing the product collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The request failed, timed out, or came back with a non-success status.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The response arrived but did not carry the expected product collection.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The API answered with `success: false`.
    #[error("Request rejected by product source{}", reason_suffix(.0))]
    Rejected(Option<String>),

    /// A raw record lacks its identity field.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::MalformedResponse(e.to_string())
        } else {
            CatalogError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_formatting() {
        assert_eq!(
            CatalogError::Rejected(None).to_string(),
            "Request rejected by product source"
        );
        assert_eq!(
            CatalogError::Rejected(Some("maintenance".into())).to_string(),
            "Request rejected by product source: maintenance"
        );
    }
}
