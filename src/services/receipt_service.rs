use crate::models::Order;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub line_total: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_id: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Derives receipt figures from a confirmed order. The grand total is the
/// service's figure; tax is backed out of it, never re-derived from the
/// session tax rate.
pub fn receipt_for(order: &Order) -> Receipt {
    let lines: Vec<ReceiptLine> = order
        .items
        .iter()
        .map(|item| ReceiptLine {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            line_total: item.line_total(),
        })
        .collect();
    let subtotal: i64 = lines.iter().map(|line| line.line_total).sum();
    Receipt {
        order_id: order.id.clone(),
        lines,
        subtotal,
        tax: order.total_amount - subtotal,
        total: order.total_amount,
    }
}

/// Renders a minor-unit amount as a decimal string, e.g. 2200 -> "22.00".
pub fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.abs();
    format!("{sign}{}.{:02}", minor / 100, minor % 100)
}
