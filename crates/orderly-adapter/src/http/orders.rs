/*
[INPUT]:  Order parameters and signed auth headers
[OUTPUT]: Order placement, cancellation, and query results
[POS]:    HTTP layer - order endpoints (require request signing)
[UPDATE]: When adding new order endpoints or changing query parameters
*/

use serde_json::{Value, from_value, to_value};

use crate::http::{OrderlyClient, Result};
use crate::types::{
    BatchCreateOrdersRequest, CreateOrderRequest, HttpMethod, OrderStatus, PaginatedOrders,
};

impl OrderlyClient {
    /// Place a single order
    ///
    /// POST /v1/order
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Value> {
        self.send_signed(HttpMethod::Post, "/v1/order", Vec::new(), Some(to_value(order)?))
            .await
    }

    /// Place several orders in one request
    ///
    /// POST /v1/batch-order
    pub async fn batch_create_orders(&self, batch: &BatchCreateOrdersRequest) -> Result<Value> {
        self.send_signed(
            HttpMethod::Post,
            "/v1/batch-order",
            Vec::new(),
            Some(to_value(batch)?),
        )
        .await
    }

    /// Cancel an order by id
    ///
    /// DELETE /v1/order?order_id={order_id}&symbol={symbol}
    pub async fn cancel_order(&self, order_id: u64, symbol: &str) -> Result<Value> {
        let query = vec![
            ("order_id".to_string(), order_id.to_string()),
            ("symbol".to_string(), symbol.to_string()),
        ];
        self.send_signed(HttpMethod::Delete, "/v1/order", query, None)
            .await
    }

    /// Query orders with optional filters
    ///
    /// GET /v1/orders?symbol={symbol}&status={status}
    pub async fn get_orders(
        &self,
        symbol: Option<&str>,
        status: Option<OrderStatus>,
    ) -> Result<PaginatedOrders> {
        let mut query = Vec::new();
        if let Some(symbol) = symbol {
            query.push(("symbol".to_string(), symbol.to_string()));
        }
        if let Some(status) = status {
            let status = serde_json::to_string(&status)?
                .trim_matches('"')
                .to_string();
            query.push(("status".to_string(), status));
        }
        let data = self
            .send_signed(HttpMethod::Get, "/v1/orders", query, None)
            .await?;
        Ok(from_value(data)?)
    }

    /// Query open orders
    ///
    /// GET /v1/orders?status=INCOMPLETE
    pub async fn get_open_orders(&self) -> Result<PaginatedOrders> {
        self.get_orders(None, Some(OrderStatus::Incomplete)).await
    }
}
