//! Service Request Model (waiter calls from a table)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a customer note, in characters
pub const MAX_REQUEST_NOTE_LEN: usize = 200;

/// What the customer is asking for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// General assistance (or a question about a specific item)
    #[default]
    Service,
    /// Bring the check
    Bill,
    /// Ready to order more
    Order,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Service => write!(f, "service"),
            RequestKind::Bill => write!(f, "bill"),
            RequestKind::Order => write!(f, "order"),
        }
    }
}

/// Request lifecycle status
///
/// ```text
/// [pending] --acknowledge--> [acknowledged] --complete--> [completed]
/// [pending] --complete---------------------------------->[completed]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Acknowledged,
    Completed,
}

impl RequestStatus {
    /// Completed is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed)
    }

    /// Whether a request is still waiting on staff
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Forward-only transitions; staying on a non-terminal status is allowed
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!(
            (*self, next),
            (Pending, Pending | Acknowledged | Completed)
                | (Acknowledged, Acknowledged | Completed)
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Acknowledged => write!(f, "acknowledged"),
            RequestStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Service request entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    /// Opaque table identifier from the URL; never parsed for identity
    pub table_id: String,
    #[serde(rename = "type", default)]
    pub kind: RequestKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Creation time (Unix millis)
    pub created_at: i64,
    #[serde(default)]
    pub status: RequestStatus,
    /// Set only when status is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl ServiceRequest {
    /// Numeric table number for display, if the table id is numeric
    pub fn table_number(&self) -> Option<u32> {
        self.table_id.trim().parse().ok()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Time from creation to completion, in millis
    pub fn response_time_ms(&self) -> Option<i64> {
        self.completed_at.map(|done| done - self.created_at)
    }
}

/// Create request payload (customer "call waiter")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestCreate {
    #[serde(rename = "type", default)]
    pub kind: RequestKind,
    pub menu_item_id: Option<String>,
    pub note: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RequestStatusUpdate {
    pub status: RequestStatus,
}

/// Waiter dashboard counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStats {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
    /// Mean completion time over completed requests
    pub avg_response_ms: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(table_id: &str) -> ServiceRequest {
        ServiceRequest {
            id: "r1".into(),
            table_id: table_id.into(),
            kind: RequestKind::Bill,
            menu_item_id: None,
            note: None,
            created_at: 1_000,
            status: RequestStatus::Pending,
            completed_at: None,
        }
    }

    #[test]
    fn test_transitions() {
        use RequestStatus::*;
        assert!(Pending.can_transition_to(Acknowledged));
        assert!(Pending.can_transition_to(Completed));
        assert!(Acknowledged.can_transition_to(Completed));
        assert!(Acknowledged.can_transition_to(Acknowledged));

        assert!(!Acknowledged.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Acknowledged));
        assert!(!Completed.can_transition_to(Completed));
    }

    #[test]
    fn test_table_number_is_display_only() {
        assert_eq!(request("5").table_number(), Some(5));
        assert_eq!(request(" 12 ").table_number(), Some(12));
        assert_eq!(request("patio-3").table_number(), None);
    }

    #[test]
    fn test_wire_layout() {
        let json = serde_json::to_value(request("5")).unwrap();
        assert_eq!(json["tableId"], "5");
        assert_eq!(json["type"], "bill");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["createdAt"], 1_000);
        assert!(json.get("completedAt").is_none());
    }

    #[test]
    fn test_response_time() {
        let mut r = request("1");
        assert_eq!(r.response_time_ms(), None);
        r.status = RequestStatus::Completed;
        r.completed_at = Some(4_000);
        assert_eq!(r.response_time_ms(), Some(3_000));
    }
}
