use crate::models::MenuItem;

/// One distinct menu item in the cart. Name and price are snapshotted when
/// the item is first added so the line renders stably even if the catalog
/// page is refreshed mid-session.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Session-scoped cart. Lines keep insertion order; a menu item appears in
/// at most one line and every line holds a quantity of at least 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.menu_item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                menu_item_id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            }),
        }
    }

    /// Decrements the line for `menu_item_id`, dropping it at zero. Unknown
    /// ids are ignored so callers may invoke this speculatively.
    pub fn remove_item(&mut self, menu_item_id: &str) {
        let Some(index) = self
            .lines
            .iter()
            .position(|line| line.menu_item_id == menu_item_id)
        else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recomputed on every call rather than cached on mutation.
    pub fn totals(&self, tax_rate: f64) -> CartTotals {
        let subtotal: i64 = self.lines.iter().map(CartLine::line_total).sum();
        let tax = (subtotal as f64 * tax_rate).round() as i64;
        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
