use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use crate::api::AppState;
use crate::error::AppResult;
use crate::model::view::Stamp;
use crate::service::catalog::CatalogView;

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct StampOption {
    pub value: Stamp,
    pub label: &'static str,
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "states": state.catalog.state_count(),
        "files": state.catalog.file_count(),
    }))
}

/// 已排序的 state 列表
pub async fn state_list(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.states())
}

pub async fn state_forms(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<FormQuery>,
) -> AppResult<Json<CatalogView>> {
    Ok(Json(state.catalog.browse(&name, &query.q)?))
}

pub async fn stamp_list() -> Json<Vec<StampOption>> {
    Json(
        Stamp::ALL
            .iter()
            .map(|stamp| StampOption {
                value: *stamp,
                label: stamp.label(),
            })
            .collect(),
    )
}
