//! Waiter Request API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/requests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/active", get(handler::list_active))
        .route("/stats", get(handler::stats))
        .route("/complete-all", post(handler::complete_all))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/complete", post(handler::complete))
}
