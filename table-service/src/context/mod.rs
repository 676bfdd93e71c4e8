//! RestaurantContext - in-memory view of the restaurant plus write-through mutations
//!
//! The context owns the [`Repositories`] and a cache of every collection.
//! Callers read from the cache; every mutation goes to the repository first
//! and then updates the cache.
//!
//! # Mutation Flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Validate input against the cache (reject → Error/Warning notification)
//!     ├─ 2. Build the new record (ids from IdGenerator, time from the clock)
//!     ├─ 3. Persist through the repository
//!     │      └─ write failed → Warning notification, keep going
//!     ├─ 4. Update the cache (and the active-request subset)
//!     └─ 5. Success notification, return the record
//! ```
//!
//! A failed write never rolls back the cache: for the rest of the session
//! memory is authoritative, and the change is lost on restart.

mod ids;
mod images;
mod menu;
mod notify;
mod requests;

pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use images::{FALLBACK_IMAGE, default_image_for};
pub use notify::{DEFAULT_HISTORY, LogNotifier, Notification, NotificationHub, Notifier, Severity};

use shared::models::{MenuCategory, MenuItem, Restaurant, RestaurantUpdate, ServiceRequest};
use shared::{AppError, AppResult, ErrorCode};
use std::collections::HashSet;
use std::sync::Arc;

use crate::repository::{Repositories, Repository};
use crate::storage::StorageResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};

/// Cached restaurant state with write-through mutations
pub struct RestaurantContext {
    repos: Repositories,
    ids: Arc<dyn IdGenerator>,
    notifier: Arc<dyn Notifier>,
    restaurant: Option<Restaurant>,
    /// Display order
    categories: Vec<MenuCategory>,
    /// Stored order
    menu_items: Vec<MenuItem>,
    /// Newest first
    requests: Vec<ServiceRequest>,
    /// Subset of `requests` not yet completed, newest first
    active_requests: Vec<ServiceRequest>,
    /// Requests whose last write failed; the cached copy wins over storage
    unsaved_requests: HashSet<String>,
}

impl std::fmt::Debug for RestaurantContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantContext")
            .field("restaurant", &self.restaurant.as_ref().map(|r| &r.name))
            .field("categories", &self.categories.len())
            .field("menu_items", &self.menu_items.len())
            .field("requests", &self.requests.len())
            .field("active_requests", &self.active_requests.len())
            .field("unsaved_requests", &self.unsaved_requests.len())
            .finish()
    }
}

impl RestaurantContext {
    /// Build the context and fill the cache from storage
    pub fn load(
        repos: Repositories,
        ids: Arc<dyn IdGenerator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mut ctx = Self {
            repos,
            ids,
            notifier,
            restaurant: None,
            categories: Vec::new(),
            menu_items: Vec::new(),
            requests: Vec::new(),
            active_requests: Vec::new(),
            unsaved_requests: HashSet::new(),
        };
        ctx.reload();
        ctx
    }

    /// Rebuild the whole cache from storage, dropping unsaved changes
    pub fn reload(&mut self) {
        self.unsaved_requests.clear();
        self.restaurant = self.repos.restaurant.get();
        self.categories = self.repos.categories.find_all();
        self.menu_items = self.repos.menu_items.find_all();
        self.requests = self.repos.requests.find_all();
        self.sync_active_requests();

        tracing::debug!(
            categories = self.categories.len(),
            menu_items = self.menu_items.len(),
            requests = self.requests.len(),
            active = self.active_requests.len(),
            "Context loaded from storage"
        );
    }

    // ========== Accessors ==========

    pub fn restaurant(&self) -> Option<&Restaurant> {
        self.restaurant.as_ref()
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    /// All requests, newest first
    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    /// Requests not yet completed, newest first
    pub fn active_requests(&self) -> &[ServiceRequest] {
        &self.active_requests
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repos
    }

    // ========== Restaurant ==========

    /// Merge the given fields into the restaurant profile
    pub fn update_restaurant_info(&mut self, data: RestaurantUpdate) -> AppResult<Restaurant> {
        let Some(mut restaurant) = self.restaurant.clone() else {
            return Err(self.reject(AppError::new(ErrorCode::RestaurantNotFound)));
        };

        let data = RestaurantUpdate {
            name: data.name.map(|n| n.trim().to_string()),
            ..data
        };
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN).map_err(|e| self.reject(e))?;
        }
        validate_optional_text(data.description.as_deref(), "description", MAX_DESCRIPTION_LEN)
            .map_err(|e| self.reject(e))?;
        validate_optional_text(data.logo_url.as_deref(), "logoUrl", MAX_URL_LEN)
            .map_err(|e| self.reject(e))?;
        if let Some(links) = &data.social_links {
            for (platform, url) in links.present() {
                validate_optional_text(Some(url), platform, MAX_URL_LEN)
                    .map_err(|e| self.reject(e))?;
            }
        }

        restaurant.apply(data);
        self.persist(self.repos.restaurant.save(&restaurant), "restaurant info");
        self.restaurant = Some(restaurant.clone());

        tracing::info!(name = %restaurant.name, "Restaurant info updated");
        self.notifier
            .notify(Notification::success("Restaurant information updated"));
        Ok(restaurant)
    }

    /// Wipe every stored collection and empty the cache
    ///
    /// Returns the number of storage keys removed.
    pub fn clear_all_data(&mut self) -> AppResult<usize> {
        let removed = self.repos.storage().clear().map_err(|e| self.reject(e.into()))?;

        self.restaurant = None;
        self.categories.clear();
        self.menu_items.clear();
        self.requests.clear();
        self.active_requests.clear();
        self.unsaved_requests.clear();

        tracing::warn!(removed, "All restaurant data cleared");
        self.notifier.notify(Notification::success("All data cleared"));
        Ok(removed)
    }

    // ========== Helpers ==========

    /// Report a rejected operation and hand the error back
    fn reject(&self, err: AppError) -> AppError {
        tracing::debug!(code = %err.code, message = %err.message, "Operation rejected");
        let notification = match err.code {
            ErrorCode::RequestAlreadyCompleted => Notification::warning(err.message.clone()),
            _ => Notification::error(err.message.clone()),
        };
        self.notifier.notify(notification);
        err
    }

    /// Downgrade a failed write to a warning; the cache stays authoritative
    ///
    /// Returns whether the write went through.
    fn persist<T>(&self, result: StorageResult<T>, what: &str) -> bool {
        let Err(e) = result else {
            return true;
        };
        tracing::warn!(error = %e, what, "Write failed, change kept in memory only");
        self.notifier.notify(Notification::warning(format!(
            "Could not save {what}; the change will be lost on restart"
        )));
        false
    }

    fn sync_active_requests(&mut self) {
        self.active_requests = self
            .requests
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests;
