//! Notification API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/notifications | GET | 最近的通知（旧的在前） |

use axum::{Json, Router, extract::State, routing::get};

use crate::context::Notification;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/notifications", get(recent))
}

pub async fn recent(State(state): State<ServerState>) -> Json<Vec<Notification>> {
    Json(state.notifications.recent())
}
