use serde::{Deserialize, Serialize};

use crate::models::{OrderStatus, OrderType, PaymentMethod};

/// Order metadata collected on the order-entry screen alongside the cart.
#[derive(Debug, Clone)]
pub struct OrderMeta {
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub client_name: String,
    pub client_phone: String,
    pub table_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItemInput>,
    pub client_name: String,
    pub client_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Prices are intentionally absent: the order service reprices every line
/// from its own catalog, so the client only names the item and the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub menu_item: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
