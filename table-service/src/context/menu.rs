//! Menu items and categories

use shared::models::{
    MenuCategory, MenuCategoryCreate, MenuCategoryUpdate, MenuItem, MenuItemCreate,
    MenuItemUpdate, MenuSection, sort_categories,
};
use shared::util::normalize_text;
use shared::{AppError, AppResult, ErrorCode};

use super::{Notification, RestaurantContext, default_image_for};
use crate::repository::Repository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_price,
    validate_required_text,
};

impl RestaurantContext {
    // ========== Menu items ==========

    /// Create a menu item in an existing category
    ///
    /// Items without an image get the category's default image.
    pub fn add_menu_item(&mut self, data: MenuItemCreate) -> AppResult<MenuItem> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN).map_err(|e| self.reject(e))?;
        validate_price(data.price).map_err(|e| self.reject(e))?;
        validate_optional_text(Some(&data.description), "description", MAX_DESCRIPTION_LEN)
            .map_err(|e| self.reject(e))?;
        validate_optional_text(data.image.as_deref(), "image", MAX_URL_LEN)
            .map_err(|e| self.reject(e))?;
        self.ensure_category(&data.category)?;

        let image = normalize_text(data.image)
            .unwrap_or_else(|| default_image_for(&data.category).to_string());
        let item = MenuItem {
            id: self.ids.new_id(),
            name,
            price: data.price,
            description: data.description.trim().to_string(),
            category: data.category,
            image: Some(image),
            available: data.available.unwrap_or(true),
        };

        self.persist(self.repos.menu_items.save(&item), "menu item");
        self.menu_items.push(item.clone());

        tracing::info!(id = %item.id, name = %item.name, category = %item.category, "Menu item added");
        self.notifier
            .notify(Notification::success(format!("Added menu item: {}", item.name)));
        Ok(item)
    }

    /// Merge the given fields into a menu item
    pub fn update_menu_item(&mut self, id: &str, data: MenuItemUpdate) -> AppResult<MenuItem> {
        let Some(idx) = self.menu_items.iter().position(|i| i.id == id) else {
            return Err(self.reject(
                AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id),
            ));
        };

        let data = MenuItemUpdate {
            name: data.name.map(|n| n.trim().to_string()),
            ..data
        };
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN).map_err(|e| self.reject(e))?;
        }
        if let Some(price) = data.price {
            validate_price(price).map_err(|e| self.reject(e))?;
        }
        validate_optional_text(data.description.as_deref(), "description", MAX_DESCRIPTION_LEN)
            .map_err(|e| self.reject(e))?;
        validate_optional_text(data.image.as_deref(), "image", MAX_URL_LEN)
            .map_err(|e| self.reject(e))?;
        if let Some(category) = &data.category {
            self.ensure_category(category)?;
        }

        let mut item = self.menu_items[idx].clone();
        item.apply(data);
        item.image = normalize_text(item.image.take())
            .or_else(|| Some(default_image_for(&item.category).to_string()));

        self.persist(self.repos.menu_items.save(&item), "menu item");
        self.menu_items[idx] = item.clone();

        tracing::info!(id = %item.id, name = %item.name, "Menu item updated");
        self.notifier.notify(Notification::success("Menu item updated"));
        Ok(item)
    }

    /// Delete a menu item; `false` if it did not exist
    pub fn remove_menu_item(&mut self, id: &str) -> AppResult<bool> {
        let Some(idx) = self.menu_items.iter().position(|i| i.id == id) else {
            return Ok(false);
        };

        self.persist(self.repos.menu_items.delete(id), "menu item");
        let item = self.menu_items.remove(idx);

        tracing::info!(id = %item.id, name = %item.name, "Menu item deleted");
        self.notifier.notify(Notification::success("Menu item deleted"));
        Ok(true)
    }

    // ========== Categories ==========

    /// Create a category; without an explicit order it goes last
    pub fn add_category(&mut self, data: MenuCategoryCreate) -> AppResult<MenuCategory> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN).map_err(|e| self.reject(e))?;
        validate_optional_text(data.description.as_deref(), "description", MAX_DESCRIPTION_LEN)
            .map_err(|e| self.reject(e))?;

        let sort_order = data.sort_order.unwrap_or_else(|| self.next_sort_order());
        let category = MenuCategory {
            id: self.ids.new_id(),
            name,
            description: normalize_text(data.description),
            sort_order: Some(sort_order),
        };

        self.persist(self.repos.categories.save(&category), "category");
        self.categories.push(category.clone());
        sort_categories(&mut self.categories);

        tracing::info!(id = %category.id, name = %category.name, order = sort_order, "Category added");
        self.notifier
            .notify(Notification::success(format!("Added category: {}", category.name)));
        Ok(category)
    }

    pub fn update_category(
        &mut self,
        id: &str,
        data: MenuCategoryUpdate,
    ) -> AppResult<MenuCategory> {
        let Some(idx) = self.categories.iter().position(|c| c.id == id) else {
            return Err(self.reject(
                AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id),
            ));
        };

        let data = MenuCategoryUpdate {
            name: data.name.map(|n| n.trim().to_string()),
            ..data
        };
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN).map_err(|e| self.reject(e))?;
        }
        validate_optional_text(data.description.as_deref(), "description", MAX_DESCRIPTION_LEN)
            .map_err(|e| self.reject(e))?;

        let mut category = self.categories[idx].clone();
        category.apply(data);
        category.description = normalize_text(category.description.take());

        self.persist(self.repos.categories.save(&category), "category");
        self.categories[idx] = category.clone();
        sort_categories(&mut self.categories);

        tracing::info!(id = %category.id, name = %category.name, "Category updated");
        self.notifier.notify(Notification::success("Category updated"));
        Ok(category)
    }

    /// Delete a category that no menu item references
    ///
    /// Fails with `CategoryHasItems` (and changes nothing) while any item
    /// still points at it; `false` if the category did not exist.
    pub fn delete_category(&mut self, id: &str) -> AppResult<bool> {
        let Some(idx) = self.categories.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        let cached = self.menu_items.iter().filter(|i| i.category == id).count();
        let stored = self.repos.menu_items.find_by_category(id).len();
        let item_count = cached.max(stored);
        if item_count > 0 {
            return Err(self.reject(
                AppError::new(ErrorCode::CategoryHasItems)
                    .with_detail("id", id)
                    .with_detail("itemCount", item_count),
            ));
        }

        self.persist(self.repos.categories.delete(id), "category");
        let category = self.categories.remove(idx);

        tracing::info!(id = %category.id, name = %category.name, "Category deleted");
        self.notifier.notify(Notification::success("Category deleted"));
        Ok(true)
    }

    // ========== Customer view ==========

    /// Menu as customers see it: categories in order, available items only
    ///
    /// A non-blank `search` keeps items whose name or description contains
    /// it (case-insensitive) and drops categories left empty.
    pub fn customer_menu(&self, search: Option<&str>) -> Vec<MenuSection> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        self.categories
            .iter()
            .map(|category| MenuSection {
                category: category.clone(),
                items: self
                    .menu_items
                    .iter()
                    .filter(|item| item.available && item.category == category.id)
                    .filter(|item| needle.as_deref().is_none_or(|n| item.matches(n)))
                    .cloned()
                    .collect(),
            })
            .filter(|section| needle.is_none() || !section.items.is_empty())
            .collect()
    }

    // ========== Helpers ==========

    fn ensure_category(&self, category_id: &str) -> AppResult<()> {
        if self.categories.iter().any(|c| c.id == category_id) {
            return Ok(());
        }
        Err(self.reject(
            AppError::new(ErrorCode::CategoryNotFound).with_detail("id", category_id),
        ))
    }

    fn next_sort_order(&self) -> i32 {
        let cached = self.categories.iter().filter_map(|c| c.sort_order).max();
        cached
            .max(self.repos.categories.max_sort_order())
            .map_or(1, |max| max + 1)
    }
}
