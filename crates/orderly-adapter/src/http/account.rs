/*
[INPUT]:  Query parameters and signed auth headers
[OUTPUT]: Account and API-key information
[POS]:    HTTP layer - account endpoints (require request signing)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use serde_json::from_value;

use crate::http::{OrderlyClient, Result};
use crate::types::{HttpMethod, KeyInfo};

impl OrderlyClient {
    /// Get information about the key used to sign this request
    ///
    /// GET /v1/client/key_info
    pub async fn get_account_info(&self) -> Result<KeyInfo> {
        let data = self
            .send_signed(HttpMethod::Get, "/v1/client/key_info", Vec::new(), None)
            .await?;
        Ok(from_value(data)?)
    }

    /// Get key info filtered by key status
    ///
    /// GET /v1/client/key_info?key_status={status}
    pub async fn get_key_info_by_status(&self, key_status: &str) -> Result<KeyInfo> {
        let query = vec![("key_status".to_string(), key_status.to_string())];
        let data = self
            .send_signed(HttpMethod::Get, "/v1/client/key_info", query, None)
            .await?;
        Ok(from_value(data)?)
    }
}
