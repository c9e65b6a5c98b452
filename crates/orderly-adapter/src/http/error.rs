/*
[INPUT]:  Error sources (HTTP, API, signing, codec, configuration)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Orderly adapter
#[derive(Error, Debug)]
pub enum OrderlyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// One or more required credentials are absent
    #[error("missing credentials: {}", .0.join(", "))]
    MissingCredential(Vec<String>),

    /// Base58 input contains characters outside the alphabet
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Decoded key bytes are not valid for the signing primitive
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// The underlying signing primitive rejected the operation
    #[error("signing failed: {0}")]
    SigningFailure(String),

    /// A typed-data field value does not match its fixed field type
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OrderlyError {
    /// Check if the error is retryable
    ///
    /// Signing and credential failures indicate misconfiguration and are
    /// never retryable; only transport-level failures are.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OrderlyError::Http(_) | OrderlyError::InvalidResponse(_)
        )
    }

    /// Check if error indicates a local signing/credential failure
    ///
    /// These must prevent the request from being sent at all.
    pub fn is_signing_error(&self) -> bool {
        matches!(
            self,
            OrderlyError::MissingCredential(_)
                | OrderlyError::InvalidEncoding(_)
                | OrderlyError::InvalidKeyMaterial(_)
                | OrderlyError::SigningFailure(_)
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        OrderlyError::Api {
            code: i64::from(status.as_u16()),
            message: message.into(),
        }
    }
}

/// Result type alias for Orderly adapter operations
pub type Result<T> = std::result::Result<T, OrderlyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_errors_not_retryable() {
        let err = OrderlyError::MissingCredential(vec!["secret_key".to_string()]);
        assert!(err.is_signing_error());
        assert!(!err.is_retryable());

        let err = OrderlyError::InvalidKeyMaterial("bad length".to_string());
        assert!(err.is_signing_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_missing_credential_lists_fields() {
        let err = OrderlyError::MissingCredential(vec![
            "api_key".to_string(),
            "account_id".to_string(),
        ]);
        assert_eq!(err.to_string(), "missing credentials: api_key, account_id");
    }

    #[test]
    fn test_api_error_creation() {
        let err = OrderlyError::api_error(StatusCode::BAD_REQUEST, "invalid symbol");
        match err {
            OrderlyError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "invalid symbol");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
