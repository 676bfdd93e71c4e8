//! Menu Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display order, ascending. Unordered categories sort last.
    #[serde(rename = "order", default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

impl MenuCategory {
    /// Merge the provided fields into this category
    pub fn apply(&mut self, data: MenuCategoryUpdate) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = Some(description);
        }
        if let Some(sort_order) = data.sort_order {
            self.sort_order = Some(sort_order);
        }
    }
}

/// Sort categories ascending by display order (stable, unordered last)
pub fn sort_categories(categories: &mut [MenuCategory]) {
    categories.sort_by_key(|c| (c.sort_order.is_none(), c.sort_order.unwrap_or_default()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str, order: Option<i32>) -> MenuCategory {
        MenuCategory {
            id: id.into(),
            name: id.into(),
            description: None,
            sort_order: order,
        }
    }

    #[test]
    fn test_sort_categories_unordered_last() {
        let mut cats = vec![
            cat("late", None),
            cat("drinks", Some(6)),
            cat("starters", Some(1)),
            cat("extra", None),
        ];
        sort_categories(&mut cats);
        let ids: Vec<_> = cats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["starters", "drinks", "late", "extra"]);
    }

    #[test]
    fn test_order_field_name() {
        let json = serde_json::to_value(cat("pasta", Some(2))).unwrap();
        assert_eq!(json["order"], 2);
        assert!(json.get("sortOrder").is_none());
    }
}
