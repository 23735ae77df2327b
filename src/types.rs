//! Common types and data structures

use serde::Deserialize;

/// Menu document embedded at build time
#[derive(Deserialize)]
pub struct MenuFile {
    pub pizzas: Vec<MenuItem>,
}

/// A pizza offering. Prices are integer cents; conversion to a decimal
/// amount happens at display time only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// One distinct entry in the order. Identity is the (name, price) pair, so
/// the same pizza at a different price gets its own line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub quantity: u32,
    pub name: String,
    pub price: i64,
}

impl OrderLine {
    pub fn matches(&self, name: &str, price: i64) -> bool {
        self.name == name && self.price == price
    }

    /// Line subtotal in integer cents
    pub fn subtotal(&self) -> i64 {
        self.quantity as i64 * self.price
    }
}
