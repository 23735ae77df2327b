//! Menu loading and validation
//!
//! The menu ships embedded in the binary. It is parsed once at startup and
//! any defect is fatal: there is no recovery path for a broken menu, so the
//! app refuses to start rather than render from bad data.

use crate::types::{MenuFile, MenuItem};
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

const MENU_JSON: &str = include_str!("../assets/menu.json");

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu contains no pizzas")]
    Empty,
    #[error("menu entry {index} has an empty name")]
    EmptyName { index: usize },
    #[error("menu entry '{name}' has a non-positive price ({price} cents)")]
    BadPrice { name: String, price: i64 },
    #[error("menu lists '{name}' at {price} cents more than once")]
    Duplicate { name: String, price: i64 },
}

/// Parse and validate the embedded menu.
pub fn load() -> Result<Vec<MenuItem>, MenuError> {
    let items = parse(MENU_JSON)?;
    info!(count = items.len(), "Menu loaded");
    Ok(items)
}

fn parse(json: &str) -> Result<Vec<MenuItem>, MenuError> {
    let file: MenuFile = serde_json::from_str(json)?;
    if file.pizzas.is_empty() {
        return Err(MenuError::Empty);
    }
    let mut seen = HashSet::new();
    for (index, item) in file.pizzas.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(MenuError::EmptyName { index });
        }
        if item.price <= 0 {
            return Err(MenuError::BadPrice {
                name: item.name.clone(),
                price: item.price,
            });
        }
        if !seen.insert((item.name.clone(), item.price)) {
            return Err(MenuError::Duplicate {
                name: item.name.clone(),
                price: item.price,
            });
        }
    }
    Ok(file.pizzas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_menu_is_valid() {
        let items = load().unwrap();
        assert!(!items.is_empty());
    }

    #[test]
    fn parses_prices_and_optional_descriptions() {
        let items = parse(
            r#"{"pizzas": [
                {"name": "Margherita", "price": 800, "description": "Tomato and mozzarella"},
                {"name": "Funghi", "price": 950}
            ]}"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, 800);
        assert!(items[0].description.is_some());
        assert!(items[1].description.is_none());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(parse("{"), Err(MenuError::Parse(_))));
    }

    #[test]
    fn rejects_empty_menu() {
        assert!(matches!(parse(r#"{"pizzas": []}"#), Err(MenuError::Empty)));
    }

    #[test]
    fn rejects_blank_names() {
        let err = parse(r#"{"pizzas": [{"name": "  ", "price": 800}]}"#).unwrap_err();
        assert!(matches!(err, MenuError::EmptyName { index: 0 }));
    }

    #[test]
    fn rejects_non_positive_prices() {
        let err = parse(r#"{"pizzas": [{"name": "Margherita", "price": 0}]}"#).unwrap_err();
        assert!(matches!(err, MenuError::BadPrice { price: 0, .. }));
    }

    #[test]
    fn rejects_duplicate_entries() {
        let err = parse(
            r#"{"pizzas": [
                {"name": "Margherita", "price": 800},
                {"name": "Margherita", "price": 800}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::Duplicate { price: 800, .. }));
    }
}
