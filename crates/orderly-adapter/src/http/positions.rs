/*
[INPUT]:  Symbol identifiers and signed auth headers
[OUTPUT]: Position data for the account
[POS]:    HTTP layer - position endpoints (require request signing)
[UPDATE]: When adding new position endpoints
*/

use serde_json::from_value;

use crate::http::{OrderlyClient, Result};
use crate::types::{HttpMethod, Position, PositionsResponse};

impl OrderlyClient {
    /// Get all positions
    ///
    /// GET /v1/positions
    pub async fn get_all_positions(&self) -> Result<PositionsResponse> {
        let data = self
            .send_signed(HttpMethod::Get, "/v1/positions", Vec::new(), None)
            .await?;
        Ok(from_value(data)?)
    }

    /// Get one position by symbol
    ///
    /// GET /v1/position/{symbol}
    pub async fn get_position(&self, symbol: &str) -> Result<Position> {
        let path = format!("/v1/position/{symbol}");
        let data = self
            .send_signed(HttpMethod::Get, &path, Vec::new(), None)
            .await?;
        Ok(from_value(data)?)
    }
}
