use uuid::Uuid;

use crate::{
    client::OrderGateway,
    dto::orders::{CreateOrderRequest, OrderItemInput, OrderMeta},
    error::{AppError, AppResult},
    models::{MenuItem, Order, OrderType},
    services::cart_service::{Cart, CartTotals},
};

/// One order-entry session: the cart being built, the totals shown beside
/// it, and the last order the service confirmed (kept for the receipt).
/// Owned by the order-entry controller and passed down by reference.
pub struct OrderSession<G> {
    gateway: G,
    session_id: Uuid,
    tax_rate: f64,
    cart: Cart,
    last_order: Option<Order>,
}

impl<G: OrderGateway> OrderSession<G> {
    pub fn new(gateway: G, tax_rate: f64) -> Self {
        Self {
            gateway,
            session_id: Uuid::new_v4(),
            tax_rate,
            cart: Cart::new(),
            last_order: None,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals(self.tax_rate)
    }

    pub fn last_order(&self) -> Option<&Order> {
        self.last_order.as_ref()
    }

    pub fn add_item(&mut self, item: &MenuItem) {
        tracing::debug!(session = %self.session_id, item = %item.id, "add to cart");
        self.cart.add_item(item);
    }

    pub fn remove_item(&mut self, menu_item_id: &str) {
        tracing::debug!(session = %self.session_id, item = %menu_item_id, "remove from cart");
        self.cart.remove_item(menu_item_id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Validates locally, then hands the draft to the order service. The
    /// cart is cleared only after the service confirms; on any failure it is
    /// left exactly as it was so the operator can resubmit.
    pub async fn submit(&mut self, meta: OrderMeta) -> AppResult<&Order> {
        if self.cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        if meta.client_phone.trim().is_empty() {
            return Err(AppError::MissingField("phone"));
        }
        if meta.client_name.trim().is_empty() {
            return Err(AppError::MissingField("name"));
        }
        if meta.order_type == OrderType::DineIn && meta.table_id.is_none() {
            // Accepted: walk-ins are often rung up before a table is chosen.
            tracing::debug!(session = %self.session_id, "dine-in order without a table");
        }

        let draft = draft_from_cart(&self.cart, &meta);
        let order = self.gateway.submit_order(&draft).await?;
        tracing::info!(
            session = %self.session_id,
            order_id = %order.id,
            total = order.total_amount,
            "order submitted"
        );
        self.cart.clear();
        Ok(self.last_order.insert(order))
    }
}

fn draft_from_cart(cart: &Cart, meta: &OrderMeta) -> CreateOrderRequest {
    CreateOrderRequest {
        order_type: meta.order_type,
        payment_method: meta.payment_method,
        items: cart
            .lines()
            .iter()
            .map(|line| OrderItemInput {
                menu_item: line.menu_item_id.clone(),
                quantity: line.quantity,
            })
            .collect(),
        client_name: meta.client_name.clone(),
        client_phone: meta.client_phone.clone(),
        table_id: meta.table_id.clone(),
        notes: meta.notes.clone(),
    }
}
