use std::collections::BTreeMap;
use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::Value;
use crate::api::AppState;
use crate::config::TableLayout;
use crate::error::AppResult;
use crate::service::table::{format_header_v1, format_header_v2};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
    #[default]
    V1,
    V2,
}

#[derive(Debug, Deserialize)]
pub struct HeaderRequest {
    pub row: BTreeMap<String, Value>,
    #[serde(default)]
    pub variant: HeaderVariant,
    /// 不传时使用配置中的列布局
    pub layout: Option<TableLayout>,
}

pub async fn format_header(
    State(state): State<AppState>,
    Json(request): Json<HeaderRequest>,
) -> AppResult<Json<Vec<String>>> {
    let header = match request.variant {
        HeaderVariant::V1 => format_header_v1(&request.row)?,
        HeaderVariant::V2 => {
            format_header_v2(&request.row, request.layout.unwrap_or(state.config.table))?
        }
    };
    Ok(Json(header))
}
