/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed response structs with deserialization support
[POS]:    Data layer - decoded endpoint responses
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, OrderType, Side};

/// Data of GET /v1/client/key_info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInfo {
    pub orderly_key: String,
    #[serde(default)]
    pub key_status: Option<String>,
    #[serde(default)]
    pub expiration: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub position_qty: Decimal,
    #[serde(default)]
    pub average_open_price: Option<Decimal>,
    #[serde(default)]
    pub mark_price: Option<Decimal>,
    #[serde(default)]
    pub unsettled_pnl: Option<Decimal>,
    #[serde(default)]
    pub pending_long_qty: Option<Decimal>,
    #[serde(default)]
    pub pending_short_qty: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Data of GET /v1/positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionsResponse {
    pub rows: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    #[serde(default)]
    pub client_order_id: Option<String>,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_time: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub current_page: u64,
    pub records_per_page: u64,
}

/// Data of GET /v1/orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedOrders {
    pub rows: Vec<Order>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub token: String,
    pub holding: Decimal,
    #[serde(default)]
    pub frozen: Option<Decimal>,
    #[serde(default)]
    pub updated_time: Option<i64>,
}

/// Data of GET /v1/asset/holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingsResponse {
    pub holding: Vec<Holding>,
}

/// Data of GET /v1/settle_nonce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleNonce {
    pub settle_nonce: u64,
}

/// Data of GET /v1/registration_nonce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationNonce {
    pub registration_nonce: String,
}
