/*
[INPUT]:  Credentials, request descriptor, and configured signing scheme
[OUTPUT]: Complete auth header set for one outgoing request
[POS]:    Auth layer - orchestrates codec, signer, and canonical message
[UPDATE]: When changing signing algorithm or header format
*/

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::auth::canonical::{SigningRequest, canonical_message, legacy_message};
use crate::auth::credentials::Credentials;
use crate::auth::scheme::SigningScheme;
use crate::auth::signer::Ed25519Signer;
use crate::codec::base64url;
use crate::http::Result;

type HmacSha256 = Hmac<Sha256>;

/// Header names are a fixed wire contract with the exchange, casing included.
const HEADER_CONTENT_TYPE: &str = "Content-Type";
const HEADER_TIMESTAMP: &str = "orderly-timestamp";
const HEADER_ACCOUNT_ID: &str = "orderly-account-id";
const HEADER_KEY: &str = "orderly-key";
const HEADER_SIGNATURE: &str = "orderly-signature";

/// Prefix identifying the signature algorithm in the key header.
const KEY_ALGORITHM_PREFIX: &str = "ed25519:";

/// Builds the signed header set for authenticated requests.
///
/// Each `build` call is pure computation over an immutable credentials
/// snapshot; concurrent calls need no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthHeaderBuilder {
    scheme: SigningScheme,
}

impl AuthHeaderBuilder {
    /// Builder for the live signing scheme.
    pub fn new() -> Self {
        Self::with_scheme(SigningScheme::default())
    }

    /// Builder pinned to an explicit scheme revision.
    pub fn with_scheme(scheme: SigningScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    /// Produce the full header set for one request.
    ///
    /// Fails before any signing work if a required credential is absent, and
    /// with `InvalidEncoding`/`InvalidKeyMaterial` if the stored secret is
    /// malformed. All failures are fatal misconfiguration; the caller must
    /// not send the request.
    pub fn build(
        &self,
        credentials: &Credentials,
        request: &SigningRequest,
    ) -> Result<BTreeMap<String, String>> {
        credentials.validate()?;

        let message = if self.scheme.signs_query() {
            canonical_message(request)
        } else {
            legacy_message(request)
        };

        let (key_header, signature) = match self.scheme {
            SigningScheme::HmacV1 => {
                let mut mac = HmacSha256::new_from_slice(credentials.secret_key().as_bytes())
                    .map_err(|e| crate::http::OrderlyError::SigningFailure(e.to_string()))?;
                mac.update(message.as_bytes());
                let digest = mac.finalize().into_bytes();
                (credentials.api_key().to_string(), hex::encode(digest))
            }
            SigningScheme::Ed25519V2 | SigningScheme::Ed25519V3 => {
                let signer = Ed25519Signer::from_base58(credentials.secret_key())?;
                let signature = base64url::encode(&signer.sign(message.as_bytes()));
                let key = if self.scheme.derives_public_key() {
                    format!("{KEY_ALGORITHM_PREFIX}{}", signer.public_key_base58())
                } else {
                    credentials.api_key().to_string()
                };
                (key, signature)
            }
        };

        debug!(
            scheme = ?self.scheme,
            method = request.method.as_str(),
            path = %request.path,
            message_len = message.len(),
            "signed request"
        );

        let mut headers = BTreeMap::new();
        headers.insert(
            HEADER_CONTENT_TYPE.to_string(),
            request.method.content_type().to_string(),
        );
        headers.insert(
            HEADER_TIMESTAMP.to_string(),
            request.timestamp_ms.to_string(),
        );
        headers.insert(
            HEADER_ACCOUNT_ID.to_string(),
            credentials.account_id().to_string(),
        );
        headers.insert(HEADER_KEY.to_string(), key_header);
        headers.insert(HEADER_SIGNATURE.to_string(), signature);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::OrderlyError;
    use crate::types::HttpMethod;
    use serde_json::json;

    const SECRET_KEY: &str = "5Hd7DLap5XV5qP3tkTYKwrbkiB1mzc2v9gk5U1K52FDq";
    const API_KEY: &str = "6Nn7hUFANgm2wbvy3A43ckuqFKqDCeggnae3219T7Yyq";
    const ACCOUNT_ID: &str = "0xd8bc14ea4e7ab8c6ce4e832b1b7ee03f982295002312904d56b169ffb560f3db";
    const TS: i64 = 1700000000000;

    fn test_credentials() -> Credentials {
        Credentials::new(API_KEY, SECRET_KEY, ACCOUNT_ID)
    }

    #[test]
    fn test_get_request_headers_end_to_end() {
        let builder = AuthHeaderBuilder::new();
        let request = SigningRequest::at(HttpMethod::Get, "/v1/client/key_info", TS);
        let headers = builder.build(&test_credentials(), &request).unwrap();

        assert_eq!(headers["orderly-timestamp"], "1700000000000");
        assert_eq!(headers["orderly-account-id"], ACCOUNT_ID);
        assert_eq!(headers["Content-Type"], "application/x-www-form-urlencoded");
        assert_eq!(headers["orderly-key"], format!("ed25519:{API_KEY}"));
        // Deterministic RFC 8032 signing: exact signature is reproducible.
        assert_eq!(
            headers["orderly-signature"],
            "1kSOCZzBJ2aCj3IPQQsci70I42AlX3ymlBJ5RKdJYG5yf6aO8ibxiwi0_PCBxUz-BVSzEdqtAFCtw5mR_YD7Cw"
        );
    }

    #[test]
    fn test_signature_verifies_against_canonical_message() {
        let builder = AuthHeaderBuilder::new();
        let request = SigningRequest::at(HttpMethod::Post, "/v1/order", TS).with_body(json!({
            "symbol": "PERP_ETH_USDC",
            "order_type": "MARKET",
            "side": "BUY",
            "order_quantity": 0.1,
        }));
        let headers = builder.build(&test_credentials(), &request).unwrap();

        let signer = Ed25519Signer::from_base58(SECRET_KEY).unwrap();
        let signature: [u8; 64] = base64url::decode(&headers["orderly-signature"])
            .unwrap()
            .try_into()
            .unwrap();
        assert!(signer.verify(canonical_message(&request).as_bytes(), &signature));
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_v2_scheme_sends_stored_key_and_ignores_query() {
        let builder = AuthHeaderBuilder::with_scheme(SigningScheme::Ed25519V2);
        let request = SigningRequest::at(HttpMethod::Get, "/v1/orders", TS)
            .with_query(vec![("symbol".into(), "PERP_ETH_USDC".into())]);
        let headers = builder.build(&test_credentials(), &request).unwrap();

        assert_eq!(headers["orderly-key"], API_KEY);

        let signer = Ed25519Signer::from_base58(SECRET_KEY).unwrap();
        let signature: [u8; 64] = base64url::decode(&headers["orderly-signature"])
            .unwrap()
            .try_into()
            .unwrap();
        // Signed content omits the query under the second-generation scheme.
        assert!(signer.verify(b"1700000000000GET/v1/orders", &signature));
    }

    #[test]
    fn test_hmac_v1_scheme() {
        let builder = AuthHeaderBuilder::with_scheme(SigningScheme::HmacV1);
        let request = SigningRequest::at(HttpMethod::Post, "/v1/order", TS).with_body(json!({
            "symbol": "PERP_ETH_USDC",
            "order_type": "MARKET",
            "side": "BUY",
            "order_quantity": 0.1,
        }));
        let headers = builder.build(&test_credentials(), &request).unwrap();

        assert_eq!(headers["orderly-key"], API_KEY);
        assert_eq!(
            headers["orderly-signature"],
            "fbffcadacc3a9d8b25df92f758992948f523aed22be5ec2458b23a653e778de9"
        );
    }

    #[test]
    fn test_missing_credentials_block_signing() {
        let builder = AuthHeaderBuilder::new();
        let creds = Credentials::new(API_KEY, "", ACCOUNT_ID);
        let request = SigningRequest::at(HttpMethod::Get, "/v1/positions", TS);

        let err = builder.build(&creds, &request).unwrap_err();
        match err {
            OrderlyError::MissingCredential(missing) => {
                assert_eq!(missing, vec!["secret_key"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_secret_distinct_from_missing() {
        let builder = AuthHeaderBuilder::new();
        let request = SigningRequest::at(HttpMethod::Get, "/v1/positions", TS);

        let creds = Credentials::new(API_KEY, "0OIl-not-base58", ACCOUNT_ID);
        assert!(matches!(
            builder.build(&creds, &request).unwrap_err(),
            OrderlyError::InvalidEncoding(_)
        ));

        // Valid base58, wrong decoded length.
        let creds = Credentials::new(API_KEY, "abc", ACCOUNT_ID);
        assert!(matches!(
            builder.build(&creds, &request).unwrap_err(),
            OrderlyError::InvalidKeyMaterial(_)
        ));
    }
}
