use async_trait::async_trait;

use crate::{
    client::{ApiClient, OrderGateway},
    dto::{
        orders::{CreateOrderRequest, UpdateOrderStatusRequest},
        params::Pagination,
    },
    error::AppResult,
    models::{Order, OrderStatus},
    response::Paged,
};

#[async_trait]
impl OrderGateway for ApiClient {
    async fn submit_order(&self, draft: &CreateOrderRequest) -> AppResult<Order> {
        let order: Order = self.post_json("/orders", draft).await?;
        tracing::info!(order_id = %order.id, total = order.total_amount, "order created");
        Ok(order)
    }

    async fn list_orders(&self, pagination: &Pagination) -> AppResult<Paged<Order>> {
        self.get_json("/orders", &pagination.query()).await
    }

    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> AppResult<Order> {
        let path = format!("/orders/{order_id}/status");
        self.patch_json(&path, &UpdateOrderStatusRequest { status })
            .await
    }

    async fn kitchen_queue(&self) -> AppResult<Vec<Order>> {
        self.get_json("/orders/kitchen", &[]).await
    }
}
