/*
[INPUT]:  API key, base58 secret key, and account id strings
[OUTPUT]: Immutable credential snapshot with presence validation
[POS]:    Auth layer - credential storage and pre-signing checks
[UPDATE]: When required credential fields change
*/

use std::fmt::Debug;

use crate::http::{OrderlyError, Result};

/// Credentials for signed API requests.
///
/// Loaded once at process start and treated as immutable afterwards. If
/// credentials are ever rotated at runtime, the whole value must be swapped
/// (e.g. replace the `Arc<Credentials>`), never mutated field by field.
#[derive(Clone)]
pub struct Credentials {
    /// Stored API key (the base58 public key registered with the exchange).
    api_key: String,
    /// Base58-encoded ed25519 secret key.
    secret_key: String,
    /// Exchange account id (hex string).
    account_id: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("api_key", &self.api_key)
            .field("secret_key", &format!("<redacted, {} chars>", self.secret_key.len()))
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            account_id: account_id.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// List required fields that are empty.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.api_key.is_empty() {
            missing.push("api_key".to_string());
        }
        if self.secret_key.is_empty() {
            missing.push("secret_key".to_string());
        }
        if self.account_id.is_empty() {
            missing.push("account_id".to_string());
        }
        missing
    }

    /// Check that all required fields are present before signing.
    ///
    /// Presence only: whether the secret actually decodes to valid key
    /// material is deferred to the header builder, so that missing and
    /// malformed credentials stay distinguishable to the caller.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(OrderlyError::MissingCredential(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_credentials() {
        let creds = Credentials::new("key", "secret", "0xabc");
        assert!(creds.validate().is_ok());
        assert!(creds.missing_fields().is_empty());
    }

    #[test]
    fn test_validate_empty_credentials_lists_all_fields() {
        let creds = Credentials::new("", "", "");
        let err = creds.validate().unwrap_err();
        match err {
            OrderlyError::MissingCredential(missing) => {
                assert_eq!(missing, vec!["api_key", "secret_key", "account_id"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_lists_only_empty_fields() {
        let creds = Credentials::new("key", "", "0xabc");
        match creds.validate().unwrap_err() {
            OrderlyError::MissingCredential(missing) => {
                assert_eq!(missing, vec!["secret_key"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("key", "super-secret-material", "0xabc");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("super-secret-material"));
        assert!(rendered.contains("<redacted, 21 chars>"));
    }
}
