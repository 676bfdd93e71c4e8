//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MenuCategory;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Non-negative price, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    /// Category ID this item belongs to
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unavailable items are hidden from customers but kept for re-enabling
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    pub available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl MenuItem {
    /// Merge the provided fields into this item
    pub fn apply(&mut self, data: MenuItemUpdate) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(price) = data.price {
            self.price = price;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(category) = data.category {
            self.category = category;
        }
        if let Some(image) = data.image {
            self.image = Some(image);
        }
        if let Some(available) = data.available {
            self.available = available;
        }
    }

    /// Case-insensitive match against name and description
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// One category with the items a customer can currently order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub category: MenuCategory,
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiramisu() -> MenuItem {
        MenuItem {
            id: "8".into(),
            name: "Tiramisu".into(),
            price: Decimal::new(899, 2),
            description: "Coffee-flavored Italian dessert".into(),
            category: "desserts".into(),
            image: None,
            available: true,
        }
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_value(tiramisu()).unwrap();
        assert!(json["price"].is_number());
        let back: MenuItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.price, Decimal::new(899, 2));
    }

    #[test]
    fn test_matches_name_or_description() {
        let item = tiramisu();
        assert!(item.matches("tira"));
        assert!(item.matches("coffee"));
        assert!(!item.matches("pizza"));
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut item = tiramisu();
        item.apply(MenuItemUpdate {
            available: Some(false),
            ..Default::default()
        });
        assert!(!item.available);
        assert_eq!(item.name, "Tiramisu");
        assert_eq!(item.category, "desserts");
    }

    #[test]
    fn test_available_defaults_to_true() {
        let json = serde_json::json!({
            "id": "x",
            "name": "Water",
            "price": 1.5,
            "category": "drinks"
        });
        let item: MenuItem = serde_json::from_value(json).unwrap();
        assert!(item.available);
        assert_eq!(item.description, "");
    }
}
