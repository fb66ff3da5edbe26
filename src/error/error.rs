use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// 下载失败时统一展示给用户的提示，具体原因只写日志
pub const FILE_UNAVAILABLE_MESSAGE: &str =
    "Unable to download this form. Please verify file availability.";

pub const NO_FORM_SELECTED_MESSAGE: &str = "Select a form before downloading.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", FILE_UNAVAILABLE_MESSAGE)]
    FileUnavailable,

    #[error("State not found: {0}")]
    StateNotFound(String),

    #[error("Session not found: {id}")]
    SessionNotFound { id: String },
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("{:?}", err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::StateNotFound(_) | AppError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::FileUnavailable | AppError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("请求处理失败: {}", self);
        }
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
