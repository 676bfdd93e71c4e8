//! Customer Menu API
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/menu?search= | GET | 按分类分组的可售菜品，可按关键字搜索 |

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::models::MenuSection;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(customer_menu))
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub search: Option<String>,
}

/// GET /api/menu - 顾客菜单
pub async fn customer_menu(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> Json<Vec<MenuSection>> {
    Json(state.context().customer_menu(query.search.as_deref()))
}
