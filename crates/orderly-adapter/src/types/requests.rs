/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request structs with serialization support
[POS]:    Data layer - outgoing request bodies
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{OrderType, Side};

/// Body for POST /v1/order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub symbol: String,
    pub order_type: OrderType,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_quantity: Option<Decimal>,
}

impl CreateOrderRequest {
    /// Market order helper; price-carrying fields stay unset.
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            side,
            order_price: None,
            order_quantity: Some(quantity),
            order_amount: None,
            client_order_id: None,
            reduce_only: None,
            visible_quantity: None,
        }
    }

    /// Limit order helper.
    pub fn limit(symbol: impl Into<String>, side: Side, price: Decimal, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            side,
            order_price: Some(price),
            order_quantity: Some(quantity),
            order_amount: None,
            client_order_id: None,
            reduce_only: None,
            visible_quantity: None,
        }
    }
}

/// Body for POST /v1/batch-order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateOrdersRequest {
    pub orders: Vec<CreateOrderRequest>,
}

/// Body for POST /v1/withdraw_request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub token: String,
    pub amount: String,
    pub address: String,
}

/// Body for wallet-signed operations (settlement, liquidation claims).
///
/// `message` is the typed-data message the wallet signed; it is forwarded
/// unmodified together with the wallet's signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSignedRequest {
    pub signature: String,
    #[serde(rename = "userAddress")]
    pub user_address: String,
    #[serde(rename = "verifyingContract")]
    pub verifying_contract: String,
    pub message: Value,
}

/// Body for POST /v1/register_account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAccountRequest {
    pub registration_nonce: String,
    pub wallet_address: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<String>,
}

/// Body for POST /v1/orderly_key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOrderlyKeyRequest {
    pub account_id: String,
    pub orderly_key: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_market_order_skips_unset_fields() {
        let order = CreateOrderRequest::market("PERP_ETH_USDC", Side::Buy, Decimal::new(1, 1));
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["order_type"], "MARKET");
        assert_eq!(json["side"], "BUY");
        assert!(json.get("order_price").is_none());
        assert!(json.get("client_order_id").is_none());
    }

    #[test]
    fn test_limit_order_serializes_price() {
        let order = CreateOrderRequest::limit(
            "PERP_BTC_USDC",
            Side::Sell,
            Decimal::new(65000, 0),
            Decimal::new(5, 3),
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_price"], "65000");
        assert_eq!(json["order_quantity"], "0.005");
    }
}
