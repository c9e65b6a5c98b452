/*
[INPUT]:  Liquidation parameters, signed auth headers, and a wallet signer
[OUTPUT]: Liquidation data and claim results
[POS]:    HTTP layer - liquidation endpoints (request signing + wallet signing)
[UPDATE]: When adding new liquidation endpoints or changing claim flow
*/

use serde_json::{Value, to_value};
use tracing::info;

use crate::auth::{WalletSigner, insurance_fund_claim_payload, liquidation_claim_payload};
use crate::http::{OrderlyClient, Result};
use crate::types::{HttpMethod, WalletSignedRequest};

impl OrderlyClient {
    /// Get claimable liquidations
    ///
    /// GET /v1/liquidation
    pub async fn get_liquidations(&self) -> Result<Value> {
        self.send_signed(HttpMethod::Get, "/v1/liquidation", Vec::new(), None)
            .await
    }

    /// Get liquidation history
    ///
    /// GET /v1/liquidation/history?symbol={symbol}
    pub async fn get_liquidation_history(&self, symbol: Option<&str>) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(symbol) = symbol {
            query.push(("symbol".to_string(), symbol.to_string()));
        }
        self.send_signed(HttpMethod::Get, "/v1/liquidation/history", query, None)
            .await
    }

    /// Claim liquidated positions.
    ///
    /// Builds the typed-data payload for the claim, has the wallet sign it,
    /// and forwards signature and message verbatim.
    ///
    /// POST /v1/liquidation
    pub async fn claim_liquidation(
        &self,
        wallet: &dyn WalletSigner,
        broker_id: &str,
        chain_id: u64,
        liquidation_id: u64,
    ) -> Result<Value> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis() as u64;
        let payload = liquidation_claim_payload(
            broker_id,
            chain_id,
            wallet.chain_type(),
            liquidation_id,
            timestamp_ms,
        )?;
        let signature = wallet.sign_typed_data(&payload).await?;
        info!(broker_id, chain_id, liquidation_id, "claiming liquidation");

        let body = WalletSignedRequest {
            signature,
            user_address: wallet.address().to_string(),
            verifying_contract: payload.domain.verifying_contract.to_string(),
            message: payload.message,
        };
        self.send_signed(
            HttpMethod::Post,
            "/v1/liquidation",
            Vec::new(),
            Some(to_value(body)?),
        )
        .await
    }

    /// Claim from the insurance fund.
    ///
    /// POST /v1/claim_insurance_fund
    pub async fn claim_insurance_fund(
        &self,
        wallet: &dyn WalletSigner,
        broker_id: &str,
        chain_id: u64,
        liquidation_id: u64,
        transfer_amount_to_insurance_fund: u128,
    ) -> Result<Value> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis() as u64;
        let payload = insurance_fund_claim_payload(
            broker_id,
            chain_id,
            wallet.chain_type(),
            liquidation_id,
            transfer_amount_to_insurance_fund,
            timestamp_ms,
        )?;
        let signature = wallet.sign_typed_data(&payload).await?;
        info!(broker_id, chain_id, liquidation_id, "claiming from insurance fund");

        let body = WalletSignedRequest {
            signature,
            user_address: wallet.address().to_string(),
            verifying_contract: payload.domain.verifying_contract.to_string(),
            message: payload.message,
        };
        self.send_signed(
            HttpMethod::Post,
            "/v1/claim_insurance_fund",
            Vec::new(),
            Some(to_value(body)?),
        )
        .await
    }
}
