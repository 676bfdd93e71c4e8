//! Menu Category Repository

use shared::models::{MenuCategory, sort_categories};

use super::{BaseRepository, Entity, Repository};
use crate::storage::{LocalStorage, StorageResult};

impl Entity for MenuCategory {
    const KEY: &'static str = "menu_categories";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository<MenuCategory>,
}

impl CategoryRepository {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            base: BaseRepository::new(storage),
        }
    }

    /// Highest display order in use, if any
    pub fn max_sort_order(&self) -> Option<i32> {
        self.base.load().iter().filter_map(|c| c.sort_order).max()
    }
}

impl Repository<MenuCategory> for CategoryRepository {
    /// Find all categories ordered by display order
    fn find_all(&self) -> Vec<MenuCategory> {
        let mut categories = self.base.load();
        sort_categories(&mut categories);
        categories
    }

    fn find_by_id(&self, id: &str) -> Option<MenuCategory> {
        self.base.find_by_id(id)
    }

    fn save(&self, entity: &MenuCategory) -> StorageResult<()> {
        self.base.save(entity)
    }

    fn delete(&self, id: &str) -> StorageResult<bool> {
        self.base.delete(id)
    }
}
