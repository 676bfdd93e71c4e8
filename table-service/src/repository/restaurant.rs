//! Restaurant Repository (Singleton)

use shared::models::Restaurant;

use super::Repository;
use crate::storage::{LocalStorage, StorageResult};

const KEY: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    storage: LocalStorage,
}

impl RestaurantRepository {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Get the singleton restaurant profile
    pub fn get(&self) -> Option<Restaurant> {
        self.storage.get(KEY, None)
    }

    pub fn exists(&self) -> bool {
        self.get().is_some()
    }

    /// Whether the profile key is present at all, even if it no longer parses
    pub fn is_stored(&self) -> StorageResult<bool> {
        self.storage.contains(KEY)
    }
}

impl Repository<Restaurant> for RestaurantRepository {
    /// Zero or one record
    fn find_all(&self) -> Vec<Restaurant> {
        self.get().into_iter().collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Restaurant> {
        self.get().filter(|r| r.id == id)
    }

    /// Replaces the stored profile
    fn save(&self, entity: &Restaurant) -> StorageResult<()> {
        self.storage.set(KEY, entity)
    }

    fn delete(&self, id: &str) -> StorageResult<bool> {
        if self.find_by_id(id).is_none() {
            return Ok(false);
        }
        self.storage.remove(KEY)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_roundtrip() {
        let repo = RestaurantRepository::new(LocalStorage::in_memory().unwrap());
        assert!(!repo.exists());
        assert!(repo.find_all().is_empty());

        let restaurant = Restaurant {
            id: "1".into(),
            name: "Bella Cucina".into(),
            ..Default::default()
        };
        repo.save(&restaurant).unwrap();
        assert_eq!(repo.find_by_id("1"), Some(restaurant.clone()));
        assert_eq!(repo.find_by_id("2"), None);

        let mut renamed = restaurant;
        renamed.name = "Trattoria".into();
        repo.save(&renamed).unwrap();
        assert_eq!(repo.find_all(), vec![renamed]);
    }

    #[test]
    fn test_delete_requires_matching_id() {
        let repo = RestaurantRepository::new(LocalStorage::in_memory().unwrap());
        repo.save(&Restaurant {
            id: "1".into(),
            ..Default::default()
        })
        .unwrap();
        assert!(!repo.delete("other").unwrap());
        assert!(repo.exists());
        assert!(repo.delete("1").unwrap());
        assert!(!repo.exists());
    }
}
