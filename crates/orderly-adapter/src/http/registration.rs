/*
[INPUT]:  Registration parameters and wallet signatures
[OUTPUT]: Account and API-key registration results
[POS]:    HTTP layer - registration endpoints (mix of public and signed)
[UPDATE]: When auth endpoints or registration flow change
*/

use serde_json::{Value, from_value, to_value};

use crate::http::{OrderlyClient, Result};
use crate::types::{AddOrderlyKeyRequest, HttpMethod, RegisterAccountRequest, RegistrationNonce};

impl OrderlyClient {
    /// Get a registration nonce (public)
    ///
    /// GET /v1/registration_nonce
    pub async fn get_registration_nonce(&self) -> Result<RegistrationNonce> {
        let data = self
            .send_public(HttpMethod::Get, "/v1/registration_nonce", Vec::new(), None)
            .await?;
        Ok(from_value(data)?)
    }

    /// Register an account (public; requires a wallet signature, not an
    /// API-key signature)
    ///
    /// POST /v1/register_account
    pub async fn register_account(&self, request: &RegisterAccountRequest) -> Result<Value> {
        self.send_public(
            HttpMethod::Post,
            "/v1/register_account",
            Vec::new(),
            Some(to_value(request)?),
        )
        .await
    }

    /// Look up a registered API key (public)
    ///
    /// GET /v1/get_orderly_key?account_id={id}&orderly_key={key}
    pub async fn get_orderly_key(&self, account_id: &str, orderly_key: &str) -> Result<Value> {
        let query = vec![
            ("account_id".to_string(), account_id.to_string()),
            ("orderly_key".to_string(), orderly_key.to_string()),
        ];
        self.send_public(HttpMethod::Get, "/v1/get_orderly_key", query, None)
            .await
    }

    /// Add an API key to an account (public; wallet-signed)
    ///
    /// POST /v1/orderly_key
    pub async fn add_orderly_key(&self, request: &AddOrderlyKeyRequest) -> Result<Value> {
        self.send_public(
            HttpMethod::Post,
            "/v1/orderly_key",
            Vec::new(),
            Some(to_value(request)?),
        )
        .await
    }

    /// Remove an API key from the account (signed)
    ///
    /// DELETE /v1/orderly_key
    pub async fn remove_orderly_key(&self, orderly_key: &str) -> Result<Value> {
        let body = serde_json::json!({ "orderly_key": orderly_key });
        self.send_signed(HttpMethod::Delete, "/v1/orderly_key", Vec::new(), Some(body))
            .await
    }
}
