use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use crate::api::AppState;
use crate::error::AppResult;
use crate::model::view::ViewAction;
use crate::service::session::{reduce, ViewSnapshot};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    #[serde(flatten)]
    pub snapshot: ViewSnapshot,
}

pub async fn create_session(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let (id, handle) = state.sessions.create().await?;
    let snapshot = ViewSnapshot::from_view(&handle.lock().await.view);
    Ok((StatusCode::CREATED, Json(SessionResponse { id, snapshot })))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ViewSnapshot>> {
    let handle = state.sessions.get(&id).await?;
    let session = handle.lock().await;
    Ok(Json(ViewSnapshot::from_view(&session.view)))
}

/// 对会话应用一个视图动作，返回新的快照
pub async fn apply_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(action): Json<ViewAction>,
) -> AppResult<Json<ViewSnapshot>> {
    let handle = state.sessions.get(&id).await?;
    let mut session = handle.lock().await;
    session.view = reduce(&session.view, action, &state.catalog);
    Ok(Json(ViewSnapshot::from_view(&session.view)))
}
