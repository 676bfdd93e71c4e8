//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::AppResult;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::core::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// 只返回该分类下的菜品
    pub category: Option<String>,
}

/// GET /api/menu-items - 获取所有菜品（含下架菜品）
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<MenuItem>> {
    let ctx = state.context();
    let items = ctx
        .menu_items()
        .iter()
        .filter(|item| query.category.as_deref().is_none_or(|c| item.category == c))
        .cloned()
        .collect();
    Json(items)
}

/// POST /api/menu-items - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    let item = state.context().add_menu_item(payload)?;
    Ok(Json(item))
}

/// PUT /api/menu-items/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let item = state.context().update_menu_item(&id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.context().remove_menu_item(&id)?;
    Ok(Json(deleted))
}
