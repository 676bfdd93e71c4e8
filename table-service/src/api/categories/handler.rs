//! Menu Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::AppResult;
use shared::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};

use crate::core::ServerState;

/// GET /api/categories - 获取所有分类（按显示顺序）
pub async fn list(State(state): State<ServerState>) -> Json<Vec<MenuCategory>> {
    Json(state.context().categories().to_vec())
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCategoryCreate>,
) -> AppResult<Json<MenuCategory>> {
    let category = state.context().add_category(payload)?;
    Ok(Json(category))
}

/// PUT /api/categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuCategoryUpdate>,
) -> AppResult<Json<MenuCategory>> {
    let category = state.context().update_category(&id, payload)?;
    Ok(Json(category))
}

/// DELETE /api/categories/:id - 删除分类
///
/// 仍有菜品引用时返回 409 (CategoryHasItems)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.context().delete_category(&id)?;
    Ok(Json(deleted))
}
