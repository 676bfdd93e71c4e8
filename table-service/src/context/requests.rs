//! Waiter requests and their lifecycle
//!
//! ```text
//! Pending ──→ Acknowledged ──→ Completed
//!    └─────────────────────────↗
//! ```
//!
//! Completed is terminal. Setting the current status again is a no-op.
//!
//! Other processes share the store, so status changes start from the stored
//! copy when it is further along than the cache. A request whose last write
//! failed keeps its cached copy across refreshes until a write succeeds or
//! storage shows it completed.

use shared::models::{RequestKind, RequestStats, RequestStatus, ServiceRequest};
use shared::util::{normalize_text, now_millis};
use shared::{AppError, AppResult, ErrorCode};

use super::{Notification, RestaurantContext};
use crate::repository::Repository;
use crate::utils::validation::validate_note;

impl RestaurantContext {
    /// Raise a new pending request from a table
    ///
    /// `table_id` is stored as a string whatever its source type.
    pub fn request_waiter(
        &mut self,
        table_id: impl ToString,
        kind: RequestKind,
        menu_item_id: Option<String>,
        note: Option<String>,
    ) -> AppResult<ServiceRequest> {
        let note = normalize_text(note);
        validate_note(note.as_deref()).map_err(|e| self.reject(e))?;

        let request = ServiceRequest {
            id: self.ids.new_id(),
            table_id: table_id.to_string(),
            kind,
            menu_item_id: normalize_text(menu_item_id),
            note,
            created_at: now_millis(),
            status: RequestStatus::Pending,
            completed_at: None,
        };

        self.persist_request(&request);
        self.requests.insert(0, request.clone());
        self.sync_active_requests();

        tracing::info!(
            id = %request.id,
            table_id = %request.table_id,
            kind = %request.kind,
            "Waiter requested"
        );
        let message = self.request_message(&request);
        self.notifier.notify(Notification::success(message));
        Ok(request)
    }

    /// Move a request along its lifecycle
    ///
    /// Completed requests are never changed; moving backwards is rejected.
    pub fn update_request_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> AppResult<ServiceRequest> {
        let Some(idx) = self.requests.iter().position(|r| r.id == id) else {
            return Err(self.reject(
                AppError::new(ErrorCode::RequestNotFound).with_detail("id", id),
            ));
        };

        self.adopt_stored_request(idx);
        let current = self.requests[idx].status;
        if current.is_terminal() {
            return Err(self.reject(
                AppError::new(ErrorCode::RequestAlreadyCompleted).with_detail("id", id),
            ));
        }
        if current == status {
            return Ok(self.requests[idx].clone());
        }
        if !current.can_transition_to(status) {
            return Err(self.reject(
                AppError::with_message(
                    ErrorCode::InvalidStatusTransition,
                    format!("Cannot change request from {current} to {status}"),
                )
                .with_detail("id", id),
            ));
        }

        let request = self.apply_status(idx, status);
        self.sync_active_requests();

        tracing::info!(id = %request.id, from = %current, to = %status, "Request status updated");
        let message = match status {
            RequestStatus::Completed => "Request completed",
            _ => "Request updated",
        };
        self.notifier.notify(Notification::success(message));
        Ok(request)
    }

    pub fn mark_request_complete(&mut self, id: &str) -> AppResult<ServiceRequest> {
        self.update_request_status(id, RequestStatus::Completed)
    }

    /// Complete every active request; returns how many were completed
    pub fn complete_all_active(&mut self) -> AppResult<usize> {
        // skip anything another process already completed
        self.refresh_active_requests();

        let active: Vec<usize> = self
            .requests
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_active())
            .map(|(idx, _)| idx)
            .collect();

        for &idx in &active {
            self.apply_status(idx, RequestStatus::Completed);
        }
        self.sync_active_requests();

        if !active.is_empty() {
            tracing::info!(count = active.len(), "All active requests completed");
            self.notifier.notify(Notification::success(format!(
                "Completed {} request(s)",
                active.len()
            )));
        }
        Ok(active.len())
    }

    /// Requests raised from one table, newest first
    pub fn requests_for_table(&self, table_id: &str) -> Vec<ServiceRequest> {
        self.requests
            .iter()
            .filter(|r| r.table_id == table_id)
            .cloned()
            .collect()
    }

    /// Re-read requests from storage to pick up changes made elsewhere
    ///
    /// Unsaved requests are merged back in, unless storage already has
    /// them completed.
    pub fn refresh_active_requests(&mut self) {
        let mut requests = self.repos.requests.find_all();

        if !self.unsaved_requests.is_empty() {
            let mut settled = Vec::new();
            let unsaved = self
                .requests
                .iter()
                .filter(|r| self.unsaved_requests.contains(&r.id));
            for cached in unsaved {
                match requests.iter_mut().find(|r| r.id == cached.id) {
                    Some(stored) if stored.status.is_terminal() => settled.push(stored.id.clone()),
                    Some(stored) => *stored = cached.clone(),
                    None => requests.push(cached.clone()),
                }
            }
            for id in &settled {
                self.unsaved_requests.remove(id);
            }
            requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }

        self.requests = requests;
        self.sync_active_requests();
        tracing::debug!(
            total = self.requests.len(),
            active = self.active_requests.len(),
            unsaved = self.unsaved_requests.len(),
            "Requests refreshed from storage"
        );
    }

    /// Counts and average response time over the cached requests
    pub fn request_stats(&self) -> RequestStats {
        let response_times: Vec<i64> = self
            .requests
            .iter()
            .filter_map(ServiceRequest::response_time_ms)
            .collect();
        let avg_response_ms = (!response_times.is_empty())
            .then(|| response_times.iter().sum::<i64>() / response_times.len() as i64);

        RequestStats {
            active: self.active_requests.len(),
            completed: self
                .requests
                .iter()
                .filter(|r| r.status == RequestStatus::Completed)
                .count(),
            total: self.requests.len(),
            avg_response_ms,
        }
    }

    // ========== Helpers ==========

    /// Write `status` to the cached request at `idx` and persist it
    fn apply_status(&mut self, idx: usize, status: RequestStatus) -> ServiceRequest {
        let mut request = self.requests[idx].clone();
        request.status = status;
        if status == RequestStatus::Completed {
            request.completed_at = Some(now_millis().max(request.created_at));
        }

        self.persist_request(&request);
        self.requests[idx] = request.clone();
        request
    }

    /// Save a request, remembering it while its write keeps failing
    fn persist_request(&mut self, request: &ServiceRequest) {
        if self.persist(self.repos.requests.save(request), "request") {
            self.unsaved_requests.remove(&request.id);
        } else {
            self.unsaved_requests.insert(request.id.clone());
        }
    }

    /// Replace the cached request at `idx` with the stored copy when storage
    /// is further along (completed, or a forward move by another process)
    fn adopt_stored_request(&mut self, idx: usize) {
        let Some(stored) = self.repos.requests.find_by_id(&self.requests[idx].id) else {
            return;
        };
        let cached = &self.requests[idx];
        if stored == *cached {
            return;
        }
        let adopt = stored.status.is_terminal()
            || (!self.unsaved_requests.contains(&stored.id)
                && cached.status.can_transition_to(stored.status));
        if !adopt {
            return;
        }

        tracing::debug!(
            id = %stored.id,
            cached = %cached.status,
            stored = %stored.status,
            "Request changed in storage, using stored copy"
        );
        self.unsaved_requests.remove(&stored.id);
        self.requests[idx] = stored;
        self.sync_active_requests();
    }

    fn request_message(&self, request: &ServiceRequest) -> String {
        let table = request
            .table_number()
            .map_or_else(|| request.table_id.clone(), |n| n.to_string());

        let item_name = request
            .menu_item_id
            .as_deref()
            .and_then(|id| self.menu_items.iter().find(|i| i.id == id))
            .map(|i| i.name.as_str());
        if let Some(name) = item_name {
            return format!("Requested waiter for {name} at Table {table}");
        }

        match request.kind {
            RequestKind::Service => format!("Service requested for Table {table}"),
            RequestKind::Bill => format!("Bill requested for Table {table}"),
            RequestKind::Order => format!("Order requested for Table {table}"),
        }
    }
}
