use crate::{
    client::OrderGateway,
    dto::params::Pagination,
    error::AppResult,
    models::{Order, OrderStatus},
    response::PageInfo,
};

/// Local mirror of the authoritative order list and kitchen queue. Refreshes
/// replace the mirrored data wholesale, so overlapping polls resolve to
/// whichever response lands last.
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
    page: Option<PageInfo>,
    kitchen: Vec<Order>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn kitchen(&self) -> &[Order] {
        &self.kitchen
    }

    pub fn page(&self) -> Option<&PageInfo> {
        self.page.as_ref()
    }

    pub fn needs_pagination(&self) -> bool {
        self.page.as_ref().is_some_and(|page| !page.single_page())
    }

    pub async fn refresh<G: OrderGateway>(
        &mut self,
        gateway: &G,
        pagination: &Pagination,
    ) -> AppResult<()> {
        let page = gateway.list_orders(pagination).await?;
        self.orders = page.data;
        self.page = Some(page.pagination);
        Ok(())
    }

    pub async fn refresh_kitchen<G: OrderGateway>(&mut self, gateway: &G) -> AppResult<()> {
        self.kitchen = gateway.kitchen_queue().await?;
        Ok(())
    }

    /// Requests the transition and mirrors whatever record comes back.
    /// Legality of the transition is the service's call, not ours. If the
    /// order is no longer mirrored locally (evicted by a poll in between),
    /// the refreshed record is simply not stored anywhere.
    pub async fn update_status<G: OrderGateway>(
        &mut self,
        gateway: &G,
        order_id: &str,
        status: OrderStatus,
    ) -> AppResult<Order> {
        let updated = match gateway.update_order_status(order_id, status).await {
            Ok(order) => order,
            Err(err) => {
                tracing::warn!(order_id, status = %status, error = %err, "status update failed");
                return Err(err);
            }
        };
        replace_by_id(&mut self.orders, &updated);
        replace_by_id(&mut self.kitchen, &updated);
        Ok(updated)
    }
}

fn replace_by_id(orders: &mut [Order], updated: &Order) {
    if let Some(slot) = orders.iter_mut().find(|order| order.id == updated.id) {
        *slot = updated.clone();
    }
}
