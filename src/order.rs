//! Order aggregation: line items, quantities and the derived total

use crate::types::OrderLine;
use tracing::debug;

/// The user's in-progress selection. Lines keep insertion order; display
/// order is insertion order. A line with quantity zero is never retained.
#[derive(Debug, Clone, Default)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Add one pizza. Increments the matching line in place (its position is
    /// preserved), or appends a new line with quantity 1. Never fails.
    pub fn add(&mut self, name: &str, price: i64) {
        match self.lines.iter_mut().find(|l| l.matches(name, price)) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(OrderLine {
                quantity: 1,
                name: name.to_owned(),
                price,
            }),
        }
        debug!(name, price, lines = self.lines.len(), "Added pizza to order");
    }

    /// Remove one unit of the matching line; the line is dropped once its
    /// quantity reaches zero. A key with no matching line is a no-op.
    ///
    /// The line list is rebuilt as a fresh sequence rather than decremented
    /// through a filter predicate's side effect.
    pub fn remove_one(&mut self, name: &str, price: i64) {
        self.lines = self
            .lines
            .iter()
            .map(|line| {
                if line.matches(name, price) {
                    OrderLine {
                        quantity: line.quantity.saturating_sub(1),
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .filter(|line| line.quantity > 0)
            .collect();
        debug!(name, price, lines = self.lines.len(), "Removed pizza from order");
    }

    /// Sum of `quantity * price` over all lines, in integer cents.
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Drop every line. Returns how many lines were cleared.
    pub fn clear(&mut self) -> usize {
        let cleared = self.lines.len();
        self.lines.clear();
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::format_price;

    #[test]
    fn repeated_adds_accumulate_on_one_line() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Margherita", 800);
        order.add("Margherita", 800);
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.lines()[0].quantity, 3);
    }

    #[test]
    fn new_key_appends_without_reordering() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Funghi", 950);
        order.add("Margherita", 800);
        order.add("Salami", 1050);
        let names: Vec<&str> = order.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Margherita", "Funghi", "Salami"]);
    }

    #[test]
    fn same_name_different_price_is_a_separate_line() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Margherita", 900);
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.lines()[0].quantity, 1);
        assert_eq!(order.lines()[1].quantity, 1);
    }

    #[test]
    fn remove_decrements_then_drops_the_line() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Margherita", 800);
        order.remove_one("Margherita", 800);
        assert_eq!(order.lines()[0].quantity, 1);
        order.remove_one("Margherita", 800);
        assert!(order.is_empty());
        // A dropped line only reappears through a fresh add
        order.remove_one("Margherita", 800);
        assert!(order.is_empty());
        order.add("Margherita", 800);
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.lines()[0].quantity, 1);
    }

    #[test]
    fn remove_keeps_the_line_position() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Funghi", 950);
        order.add("Funghi", 950);
        order.add("Salami", 1050);
        order.remove_one("Funghi", 950);
        let names: Vec<&str> = order.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Margherita", "Funghi", "Salami"]);
        assert_eq!(order.lines()[1].quantity, 1);
    }

    #[test]
    fn remove_of_unknown_key_is_a_noop() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.remove_one("Hawaii", 990);
        order.remove_one("Margherita", 850);
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.lines()[0].quantity, 1);
    }

    #[test]
    fn total_is_zero_for_the_empty_order() {
        assert_eq!(Order::new().total_cents(), 0);
    }

    #[test]
    fn clear_empties_regardless_of_contents() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Funghi", 950);
        assert_eq!(order.clear(), 2);
        assert!(order.is_empty());
        assert_eq!(order.total_cents(), 0);
        assert_eq!(order.clear(), 0);
    }

    #[test]
    fn worked_example_margherita_funghi() {
        let mut order = Order::new();
        order.add("Margherita", 800);
        order.add("Margherita", 800);
        order.add("Funghi", 950);

        assert_eq!(
            order.lines(),
            [
                OrderLine { quantity: 2, name: "Margherita".into(), price: 800 },
                OrderLine { quantity: 1, name: "Funghi".into(), price: 950 },
            ]
        );
        assert_eq!(order.total_cents(), 2550);
        assert_eq!(format_price(order.total_cents()), "€ 25.50");

        order.remove_one("Margherita", 800);
        assert_eq!(order.lines()[0].quantity, 1);

        order.remove_one("Margherita", 800);
        assert_eq!(
            order.lines(),
            [OrderLine { quantity: 1, name: "Funghi".into(), price: 950 }]
        );
        assert_eq!(order.total_cents(), 950);
        assert_eq!(format_price(order.total_cents()), "€ 9.50");
    }
}
