//! Service Request Repository

use shared::models::{RequestStatus, ServiceRequest};

use super::{BaseRepository, Entity, Repository};
use crate::storage::{LocalStorage, StorageResult};

impl Entity for ServiceRequest {
    const KEY: &'static str = "waiter_requests";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct ServiceRequestRepository {
    base: BaseRepository<ServiceRequest>,
}

/// Newest first; ties keep stored order
fn newest_first(requests: &mut [ServiceRequest]) {
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl ServiceRequestRepository {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            base: BaseRepository::new(storage),
        }
    }

    /// Requests not yet completed, newest first
    pub fn find_active(&self) -> Vec<ServiceRequest> {
        let mut requests: Vec<_> = self
            .base
            .load()
            .into_iter()
            .filter(|r| r.status.is_active())
            .collect();
        newest_first(&mut requests);
        requests
    }

    /// Requests raised from one table, newest first
    pub fn find_by_table(&self, table_id: &str) -> Vec<ServiceRequest> {
        let mut requests: Vec<_> = self
            .base
            .load()
            .into_iter()
            .filter(|r| r.table_id == table_id)
            .collect();
        newest_first(&mut requests);
        requests
    }

    /// Overwrite the status of one request, keeping every other field
    ///
    /// No transition checks happen here; the context enforces the lifecycle.
    pub fn update_status(&self, id: &str, status: RequestStatus) -> StorageResult<bool> {
        self.base.modify(id, |r| r.status = status)
    }
}

impl Repository<ServiceRequest> for ServiceRequestRepository {
    /// All requests, newest first
    fn find_all(&self) -> Vec<ServiceRequest> {
        let mut requests = self.base.load();
        newest_first(&mut requests);
        requests
    }

    fn find_by_id(&self, id: &str) -> Option<ServiceRequest> {
        self.base.find_by_id(id)
    }

    fn save(&self, entity: &ServiceRequest) -> StorageResult<()> {
        self.base.save(entity)
    }

    fn delete(&self, id: &str) -> StorageResult<bool> {
        self.base.delete(id)
    }
}
