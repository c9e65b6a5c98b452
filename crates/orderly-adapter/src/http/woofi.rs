/*
[INPUT]:  Swap parameters and signed auth headers
[OUTPUT]: WOOFi swap orders, portfolio, token list, and quotes
[POS]:    HTTP layer - WOOFi swap endpoints (mix of public and signed)
[UPDATE]: When adding new swap endpoints or changing quote parameters
*/

use serde_json::Value;

use crate::http::{OrderlyClient, Result};
use crate::types::HttpMethod;

impl OrderlyClient {
    /// Place a swap order.
    ///
    /// The body schema is owned by the swap service and forwarded as-is.
    ///
    /// POST /evm-api/restful-api/private/create-order
    pub async fn place_woofi_order(&self, order: &Value) -> Result<Value> {
        self.send_signed(
            HttpMethod::Post,
            "/evm-api/restful-api/private/create-order",
            Vec::new(),
            Some(order.clone()),
        )
        .await
    }

    /// Get the swap portfolio for the account
    ///
    /// GET /evm-api/restful-api/private/portfolio
    pub async fn get_woofi_portfolio(&self) -> Result<Value> {
        self.send_signed(
            HttpMethod::Get,
            "/evm-api/restful-api/private/portfolio",
            Vec::new(),
            None,
        )
        .await
    }

    /// Get the tokens supported by the swap service (public)
    ///
    /// GET /evm-api/restful-api/public/tokens
    pub async fn get_woofi_tokens(&self) -> Result<Value> {
        self.send_public(
            HttpMethod::Get,
            "/evm-api/restful-api/public/tokens",
            Vec::new(),
            None,
        )
        .await
    }

    /// Get a swap quote (public)
    ///
    /// GET /evm-api/restful-api/public/quote?tokenIn={}&tokenOut={}&amountIn={}
    pub async fn get_woofi_quote(
        &self,
        token_in: &str,
        token_out: &str,
        amount_in: &str,
    ) -> Result<Value> {
        let query = vec![
            ("tokenIn".to_string(), token_in.to_string()),
            ("tokenOut".to_string(), token_out.to_string()),
            ("amountIn".to_string(), amount_in.to_string()),
        ];
        self.send_public(HttpMethod::Get, "/evm-api/restful-api/public/quote", query, None)
            .await
    }
}
