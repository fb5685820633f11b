//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Harvest client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HarvestError {
    /// Bad or missing construction arguments. Raised before any I/O.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resource call is missing a required field (usually `id`).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The API answered with a status code of 400 or above.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The API reported `Authentication failed for API request.`
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The OAuth authorization-code exchange did not yield a token.
    #[error("Token exchange failed: {0}")]
    AuthExchange(String),

    /// No response was received (connection, TLS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HarvestError {
    /// Status code carried by an [`HarvestError::Http`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Validation(_) => "validation",
            Self::Http { .. } => "http",
            Self::Authentication(_) => "authentication",
            Self::AuthExchange(_) => "auth_exchange",
            Self::Network(_) => "network",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = HarvestError::Http { status: 404, body: "Not found".into() };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Not found");
        assert_eq!(HarvestError::Validation("x".into()).status(), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = HarvestError::Config("missing subdomain".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Config");
        assert_eq!(json["message"], "missing subdomain");

        let back: HarvestError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(HarvestError::AuthExchange("x".into()).label(), "auth_exchange");
        assert_eq!(HarvestError::Http { status: 500, body: String::new() }.label(), "http");
    }
}
