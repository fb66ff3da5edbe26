use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue},
    response::Response,
};
use crate::api::AppState;
use crate::error::{AppError, AppResult, FILE_UNAVAILABLE_MESSAGE, NO_FORM_SELECTED_MESSAGE};
use crate::model::view::ViewAction;
use crate::service::download::{deliver, FileSink};
use crate::service::session::reduce;

/// 以附件形式把文件交给浏览器保存
pub struct AttachmentSink;

impl FileSink for AttachmentSink {
    type Saved = Response;

    fn save(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<Response> {
        let disposition = HeaderValue::from_str(&content_disposition(file_name))
            .map_err(|e| AppError::InvalidPath(format!("Invalid file name {}: {}", file_name, e)))?;

        Response::builder()
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .header(header::CONTENT_DISPOSITION, disposition)
            .body(Body::from(bytes))
            .map_err(|e| AppError::Config(anyhow::anyhow!("Failed to build response: {}", e)))
    }
}

/// ASCII 兜底名 + RFC 5987 的 UTF-8 文件名
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .map(|c| if c == '"' || c == '\\' { '_' } else { c })
        .collect();

    let mut encoded = String::new();
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!("attachment; filename=\"{}\"; filename*=UTF-8''{}", fallback, encoded)
}

/// Downloads the session's selected form.
///
/// The session lock is released while the request is in flight, so a second
/// click simply issues a second request. The outcome is recorded in the view
/// only if the selection is still the one the download started from; a
/// result that arrives after a state or file switch is dropped.
pub async fn download_selected(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let handle = state.sessions.get(&id).await?;
    let (selected_state, selected_file) = {
        let session = handle.lock().await;
        (
            session.view.selected_state.clone(),
            session.view.selected_file.clone(),
        )
    };

    let result = deliver(
        &state.documents,
        selected_state.as_deref().unwrap_or_default(),
        selected_file.as_deref(),
        &AttachmentSink,
    )
    .await;

    let action = match &result {
        Ok(_) => ViewAction::ClearError,
        Err(AppError::Validation(_)) => ViewAction::DownloadFailed(NO_FORM_SELECTED_MESSAGE.to_string()),
        Err(_) => ViewAction::DownloadFailed(FILE_UNAVAILABLE_MESSAGE.to_string()),
    };

    let mut session = handle.lock().await;
    if session.view.selected_state == selected_state && session.view.selected_file == selected_file {
        session.view = reduce(&session.view, action, &state.catalog);
    } else {
        tracing::debug!("会话 {} 的选择已变化，丢弃下载结果", id);
    }

    result
}
