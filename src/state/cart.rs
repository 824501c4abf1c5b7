//! Shopping cart store fed by add-to-cart intents.
//!
//! DESIGN
//! ======
//! The listing page only knows [`CartState::add`]; line merging and totals
//! live here so the page never depends on the store's internal shape.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::CatalogItem;

/// Message produced when a user adds an item (with optional variant) to the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLineIntent {
    pub item: CatalogItem,
    pub variant: Option<String>,
}

/// One cart line: an item, its chosen variant, and a quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub item: CatalogItem,
    pub variant: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    fn same_line(&self, item_id: &str, variant: Option<&str>) -> bool {
        self.item.id == item_id && self.variant.as_deref() == variant
    }

    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// Cart contents shared through context.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Apply an add-to-cart intent. Repeated item + variant pairs bump the
    /// existing line's quantity.
    pub fn add(&mut self, intent: CartLineIntent) {
        let CartLineIntent { item, variant } = intent;
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.same_line(&item.id, variant.as_deref()))
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine { item, variant, quantity: 1 });
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
