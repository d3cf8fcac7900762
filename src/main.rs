use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pos_order_session::{
    client::ApiClient,
    config::AppConfig,
    dto::{
        menu::MenuQuery,
        orders::OrderMeta,
        params::Pagination,
    },
    models::{OrderType, PaymentMethod},
    services::{order_service::OrderSession, receipt_service},
};

// Small driver for poking a running POS backend: lists the first page of the
// menu and, when POS_DEMO_SUBMIT=1, rings up a takeaway order end to end.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pos_order_session=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let client = ApiClient::new(&config.api_base_url);

    let query = MenuQuery {
        pagination: Pagination::new(1, config.page_limit),
        category: None,
    };
    let menu = client.list_menu_items(&query).await?;
    tracing::info!(
        items = menu.data.len(),
        total = menu.pagination.total_items,
        single_page = menu.pagination.single_page(),
        "menu loaded"
    );
    for item in &menu.data {
        tracing::info!(
            id = %item.id,
            name = %item.name,
            price = %receipt_service::format_amount(item.price),
            available = item.available,
            "menu item"
        );
    }

    if std::env::var("POS_DEMO_SUBMIT").as_deref() != Ok("1") {
        return Ok(());
    }

    let mut session = OrderSession::new(client, config.tax_rate);
    for item in menu.data.iter().filter(|item| item.available).take(2) {
        session.add_item(item);
    }
    let totals = session.totals();
    tracing::info!(
        subtotal = %receipt_service::format_amount(totals.subtotal),
        tax = %receipt_service::format_amount(totals.tax),
        total = %receipt_service::format_amount(totals.total),
        "cart ready"
    );

    let order = session
        .submit(OrderMeta {
            order_type: OrderType::Takeaway,
            payment_method: PaymentMethod::Cash,
            client_name: std::env::var("POS_DEMO_NAME").unwrap_or_else(|_| "Walk-in".into()),
            client_phone: std::env::var("POS_DEMO_PHONE").unwrap_or_else(|_| "555-0100".into()),
            table_id: None,
            notes: None,
        })
        .await?;

    let receipt = receipt_service::receipt_for(order);
    tracing::info!(
        order_id = %receipt.order_id,
        subtotal = %receipt_service::format_amount(receipt.subtotal),
        tax = %receipt_service::format_amount(receipt.tax),
        total = %receipt_service::format_amount(receipt.total),
        "order confirmed"
    );

    Ok(())
}
