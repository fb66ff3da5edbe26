use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use crate::api::AppState;
use crate::config::BranchOptions;
use crate::error::AppResult;
use crate::model::branch::{BranchMapping, CreateBranchMapping};

pub async fn branch_options(State(state): State<AppState>) -> Json<BranchOptions> {
    Json(state.config.branches.clone())
}

pub async fn list_branch_mappings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<BranchMapping>>> {
    let handle = state.sessions.get(&id).await?;
    let session = handle.lock().await;
    Ok(Json(session.branches.list().to_vec()))
}

pub async fn add_branch_mapping(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateBranchMapping>,
) -> AppResult<(StatusCode, Json<BranchMapping>)> {
    let handle = state.sessions.get(&id).await?;
    let mut session = handle.lock().await;
    let mapping = session.branches.add(&payload)?;
    Ok((StatusCode::CREATED, Json(mapping)))
}

/// 未知 id 直接忽略
pub async fn remove_branch_mapping(
    State(state): State<AppState>,
    Path((id, mapping_id)): Path<(String, i64)>,
) -> AppResult<Json<serde_json::Value>> {
    let handle = state.sessions.get(&id).await?;
    let mut session = handle.lock().await;
    let removed = session.branches.remove(mapping_id);
    Ok(Json(serde_json::json!({"removed": removed})))
}
