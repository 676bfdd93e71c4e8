//! Repository Module
//!
//! Per-entity read/write helpers on top of [`LocalStorage`]. Each
//! collection is persisted whole under one key; every write re-serializes
//! the full collection (no partial or delta writes).
//!
//! | Repository | Key | Shape | Order |
//! |------------|-----|-------|-------|
//! | [`RestaurantRepository`] | `restaurant` | object | - |
//! | [`CategoryRepository`] | `menu_categories` | array | `order` ascending |
//! | [`MenuItemRepository`] | `menu_items` | array | stored order |
//! | [`ServiceRequestRepository`] | `waiter_requests` | array | newest first |
//!
//! Missing ids are silent no-ops here; callers that need confirmation check
//! existence first.

pub mod category;
pub mod menu_item;
pub mod restaurant;
pub mod service_request;

pub use category::CategoryRepository;
pub use menu_item::MenuItemRepository;
pub use restaurant::RestaurantRepository;
pub use service_request::ServiceRequestRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::storage::{LocalStorage, StorageResult};

/// A record stored in an id-keyed collection
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Storage key of the collection
    const KEY: &'static str;

    fn id(&self) -> &str;
}

/// Common repository trait for basic CRUD
pub trait Repository<T> {
    fn find_all(&self) -> Vec<T>;
    fn find_by_id(&self, id: &str) -> Option<T>;
    /// Upsert by id, then persist the whole collection
    fn save(&self, entity: &T) -> StorageResult<()>;
    /// Remove by id; `Ok(false)` if nothing matched
    fn delete(&self, id: &str) -> StorageResult<bool>;
}

/// Base repository over one JSON array in storage
#[derive(Clone)]
pub struct BaseRepository<T> {
    storage: LocalStorage,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> BaseRepository<T> {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage,
            _entity: PhantomData,
        }
    }

    /// All records in stored order
    pub fn load(&self) -> Vec<T> {
        self.storage.get(T::KEY, Vec::new())
    }

    fn persist(&self, records: &[T]) -> StorageResult<()> {
        self.storage.set(T::KEY, records)
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.load().into_iter().find(|r| r.id() == id)
    }

    pub fn save(&self, entity: &T) -> StorageResult<()> {
        let mut records = self.load();
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => records.push(entity.clone()),
        }
        self.persist(&records)
    }

    pub fn delete(&self, id: &str) -> StorageResult<bool> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.persist(&records)?;
        Ok(true)
    }

    /// Apply `f` to the record with `id` in place and persist; `Ok(false)` if absent
    pub fn modify(&self, id: &str, f: impl FnOnce(&mut T)) -> StorageResult<bool> {
        let mut records = self.load();
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        f(record);
        self.persist(&records)?;
        Ok(true)
    }
}

/// All repositories over one storage namespace
#[derive(Clone)]
pub struct Repositories {
    pub restaurant: RestaurantRepository,
    pub categories: CategoryRepository,
    pub menu_items: MenuItemRepository,
    pub requests: ServiceRequestRepository,
    storage: LocalStorage,
}

impl Repositories {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            restaurant: RestaurantRepository::new(storage.clone()),
            categories: CategoryRepository::new(storage.clone()),
            menu_items: MenuItemRepository::new(storage.clone()),
            requests: ServiceRequestRepository::new(storage.clone()),
            storage,
        }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }
}
