/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Funding rate data
[POS]:    HTTP layer - public funding-rate endpoints (no auth required)
[UPDATE]: When adding new funding endpoints
*/

use serde_json::Value;

use crate::http::{OrderlyClient, Result};
use crate::types::HttpMethod;

impl OrderlyClient {
    /// Get current funding rates, optionally for one symbol
    ///
    /// GET /v1/funding_rates?symbol={symbol}
    pub async fn get_funding_rates(&self, symbol: Option<&str>) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(symbol) = symbol {
            query.push(("symbol".to_string(), symbol.to_string()));
        }
        self.send_public(HttpMethod::Get, "/v1/funding_rates", query, None)
            .await
    }

    /// Get funding rate history for a symbol
    ///
    /// GET /v1/funding_rate_history?symbol={symbol}
    pub async fn get_funding_rate_history(&self, symbol: &str) -> Result<Value> {
        let query = vec![("symbol".to_string(), symbol.to_string())];
        self.send_public(HttpMethod::Get, "/v1/funding_rate_history", query, None)
            .await
    }

    /// Get the estimated next funding rate for a symbol
    ///
    /// GET /v1/estimated_funding_rate?symbol={symbol}
    pub async fn get_estimated_funding_rate(&self, symbol: &str) -> Result<Value> {
        let query = vec![("symbol".to_string(), symbol.to_string())];
        self.send_public(HttpMethod::Get, "/v1/estimated_funding_rate", query, None)
            .await
    }
}
