//! Menu Item Repository

use shared::models::MenuItem;

use super::{BaseRepository, Entity, Repository};
use crate::storage::{LocalStorage, StorageResult};

impl Entity for MenuItem {
    const KEY: &'static str = "menu_items";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository<MenuItem>,
}

impl MenuItemRepository {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            base: BaseRepository::new(storage),
        }
    }

    /// Items assigned to a category (available or not)
    pub fn find_by_category(&self, category_id: &str) -> Vec<MenuItem> {
        self.base
            .load()
            .into_iter()
            .filter(|item| item.category == category_id)
            .collect()
    }

    /// Items customers can order
    pub fn find_available(&self) -> Vec<MenuItem> {
        self.base
            .load()
            .into_iter()
            .filter(|item| item.available)
            .collect()
    }
}

impl Repository<MenuItem> for MenuItemRepository {
    fn find_all(&self) -> Vec<MenuItem> {
        self.base.load()
    }

    fn find_by_id(&self, id: &str) -> Option<MenuItem> {
        self.base.find_by_id(id)
    }

    fn save(&self, entity: &MenuItem) -> StorageResult<()> {
        self.base.save(entity)
    }

    fn delete(&self, id: &str) -> StorageResult<bool> {
        self.base.delete(id)
    }
}
