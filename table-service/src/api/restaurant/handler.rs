//! Restaurant API Handlers

use axum::{Json, extract::State};
use shared::models::{Restaurant, RestaurantUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;

/// GET /api/restaurant - 获取餐厅信息
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Restaurant>> {
    state
        .context()
        .restaurant()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))
}

/// PUT /api/restaurant - 更新餐厅信息（仅合并提供的字段）
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = state.context().update_restaurant_info(payload)?;
    Ok(Json(restaurant))
}
