//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::AppResult;
use shared::models::{ServiceRequest, ServiceRequestCreate};

use crate::core::ServerState;

/// GET /api/customer/:table_id/requests - 本桌的呼叫记录（最新在前）
pub async fn list_for_table(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> Json<Vec<ServiceRequest>> {
    Json(state.context().requests_for_table(&table_id))
}

/// POST /api/customer/:table_id/requests - 呼叫服务员
pub async fn request_waiter(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    Json(payload): Json<ServiceRequestCreate>,
) -> AppResult<Json<ServiceRequest>> {
    let request = state.context().request_waiter(
        table_id,
        payload.kind,
        payload.menu_item_id,
        payload.note,
    )?;
    Ok(Json(request))
}
