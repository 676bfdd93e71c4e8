//! Waiter Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::AppResult;
use shared::models::{RequestStats, RequestStatusUpdate, ServiceRequest};

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct CompleteAllResponse {
    pub completed: usize,
}

/// GET /api/requests - 所有请求（最新在前）
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ServiceRequest>> {
    Json(state.context().requests().to_vec())
}

/// GET /api/requests/active - 未完成的请求
pub async fn list_active(State(state): State<ServerState>) -> Json<Vec<ServiceRequest>> {
    Json(state.context().active_requests().to_vec())
}

/// GET /api/requests/stats - 请求统计
pub async fn stats(State(state): State<ServerState>) -> Json<RequestStats> {
    Json(state.context().request_stats())
}

/// PUT /api/requests/:id/status - 更新请求状态
///
/// 已完成的请求返回 409；状态回退返回 400
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RequestStatusUpdate>,
) -> AppResult<Json<ServiceRequest>> {
    let request = state.context().update_request_status(&id, payload.status)?;
    Ok(Json(request))
}

/// POST /api/requests/:id/complete - 标记完成
pub async fn complete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ServiceRequest>> {
    let request = state.context().mark_request_complete(&id)?;
    Ok(Json(request))
}

/// POST /api/requests/complete-all - 全部标记完成
pub async fn complete_all(
    State(state): State<ServerState>,
) -> AppResult<Json<CompleteAllResponse>> {
    let completed = state.context().complete_all_active()?;
    Ok(Json(CompleteAllResponse { completed }))
}
