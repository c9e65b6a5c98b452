/*
[INPUT]:  Asset parameters, signed auth headers, and a wallet signer
[OUTPUT]: Holdings, withdrawals, and PnL settlement results
[POS]:    HTTP layer - asset endpoints (request signing + wallet signing)
[UPDATE]: When adding new asset endpoints or changing settlement flow
*/

use serde_json::{Value, from_value, to_value};
use tracing::info;

use crate::auth::{WalletSigner, settlement_payload};
use crate::http::{OrderlyClient, Result};
use crate::types::{HoldingsResponse, HttpMethod, SettleNonce, WalletSignedRequest, WithdrawRequest};

impl OrderlyClient {
    /// Get asset transaction history
    ///
    /// GET /v1/asset/history
    pub async fn get_asset_history(&self) -> Result<Value> {
        self.send_signed(HttpMethod::Get, "/v1/asset/history", Vec::new(), None)
            .await
    }

    /// Get current holdings
    ///
    /// GET /v1/asset/holding
    pub async fn get_holdings(&self) -> Result<HoldingsResponse> {
        let data = self
            .send_signed(HttpMethod::Get, "/v1/asset/holding", Vec::new(), None)
            .await?;
        Ok(from_value(data)?)
    }

    /// Create a withdrawal request
    ///
    /// POST /v1/withdraw_request
    pub async fn create_withdraw_request(&self, withdraw: &WithdrawRequest) -> Result<Value> {
        self.send_signed(
            HttpMethod::Post,
            "/v1/withdraw_request",
            Vec::new(),
            Some(to_value(withdraw)?),
        )
        .await
    }

    /// Get the nonce required for the next PnL settlement
    ///
    /// GET /v1/settle_nonce
    pub async fn get_settle_nonce(&self) -> Result<SettleNonce> {
        let data = self
            .send_signed(HttpMethod::Get, "/v1/settle_nonce", Vec::new(), None)
            .await?;
        Ok(from_value(data)?)
    }

    /// Request PnL settlement.
    ///
    /// Fetches the settle nonce, builds the typed-data payload, has the
    /// wallet sign it, and forwards signature and message verbatim.
    ///
    /// POST /v1/settle_pnl
    pub async fn request_pnl_settlement(
        &self,
        wallet: &dyn WalletSigner,
        broker_id: &str,
        chain_id: u64,
    ) -> Result<Value> {
        let nonce = self.get_settle_nonce().await?;
        let timestamp_ms = chrono::Utc::now().timestamp_millis() as u64;
        let payload = settlement_payload(
            broker_id,
            chain_id,
            wallet.chain_type(),
            nonce.settle_nonce,
            timestamp_ms,
        )?;
        let signature = wallet.sign_typed_data(&payload).await?;
        info!(
            broker_id,
            chain_id,
            settle_nonce = nonce.settle_nonce,
            "requesting PnL settlement"
        );

        let body = WalletSignedRequest {
            signature,
            user_address: wallet.address().to_string(),
            verifying_contract: payload.domain.verifying_contract.to_string(),
            message: payload.message,
        };
        self.send_signed(
            HttpMethod::Post,
            "/v1/settle_pnl",
            Vec::new(),
            Some(to_value(body)?),
        )
        .await
    }

    /// Get PnL settlement history
    ///
    /// GET /v1/pnl_settlement/history
    pub async fn get_pnl_settlement_history(&self, symbol: Option<&str>) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(symbol) = symbol {
            query.push(("symbol".to_string(), symbol.to_string()));
        }
        self.send_signed(HttpMethod::Get, "/v1/pnl_settlement/history", query, None)
            .await
    }
}
