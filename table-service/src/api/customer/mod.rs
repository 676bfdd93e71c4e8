//! Customer (table side) API 模块
//!
//! 桌台 ID 来自路径，原样作为字符串传递。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/customer/{table_id}/requests",
        get(handler::list_for_table).post(handler::request_waiter),
    )
}
