use serde::{Deserialize, Serialize};

use crate::storage::Keyed;

/// Quantity used when a client does not send one (or sends `0`).
pub const DEFAULT_QUANTITY: i64 = 1;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: u64,
    pub quantity: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    pub id: u64,
    /// Older files call this array `products`.
    #[serde(default, alias = "products")]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: u64) -> Self {
        Self { id, items: Vec::new() }
    }

    /// One entry per product: repeated additions accumulate the quantity.
    pub fn add_item(&mut self, product_id: u64, quantity: i64) {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product_id, quantity }),
        }
    }

    #[cfg(test)]
    pub fn quantity_of(&self, product_id: u64) -> Option<i64> {
        self.items.iter().find(|i| i.product_id == product_id).map(|i| i.quantity)
    }
}

impl Keyed for Cart {
    fn key(&self) -> u64 { self.id }
}
