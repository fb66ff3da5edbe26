use reqwest::{header, Client, Url};
use crate::error::{AppError, AppResult, NO_FORM_SELECTED_MESSAGE};
use crate::model::catalog::{file_name, qualify_path};
use crate::util::path::validate_relative;
use super::sink::FileSink;

#[derive(Debug)]
pub struct DownloadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 从固定的文档服务器拉取文件
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: Client,
    base: Url,
}

impl DocumentClient {
    pub fn new(base: &str) -> AppResult<Self> {
        let base = Url::parse(base)
            .map_err(|e| AppError::InvalidPath(format!("Invalid document origin {}: {}", base, e)))?;
        let http = Client::builder().build()?;
        Ok(Self { http, base })
    }

    /// base + `/state` + path，每个路径段单独编码（`%` 也会被转义）
    pub fn document_url(&self, state: &str, path: &str) -> AppResult<Url> {
        validate_relative(path)?;
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::InvalidPath(format!("Document origin cannot be a base: {}", self.base))
            })?;
            segments.pop_if_empty().push(state);
            segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        Ok(url)
    }

    /// Fetches the selected form.
    ///
    /// Missing selection is a validation error and issues no request. Every
    /// resource failure (transport error, non-success status, an HTML page
    /// where a document was expected, an empty body) collapses into
    /// [`AppError::FileUnavailable`]; the concrete cause only goes to the log.
    pub async fn download(&self, state: &str, selected: Option<&str>) -> AppResult<DownloadedFile> {
        let path = match selected {
            Some(path) if !path.is_empty() && !state.is_empty() => path,
            _ => return Err(AppError::Validation(NO_FORM_SELECTED_MESSAGE.to_string())),
        };

        let url = self.document_url(state, path)?;
        tracing::info!("📥 下载文件: {}", url);

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!("请求失败 {}: {}", url, e);
            AppError::FileUnavailable
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("文件不存在 {}: status {}", url, status);
            return Err(AppError::FileUnavailable);
        }

        let is_html = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase().contains("text/html"))
            .unwrap_or(false);
        if is_html {
            tracing::warn!("路径无效 {}: 服务器返回了 HTML 页面", url);
            return Err(AppError::FileUnavailable);
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!("读取响应失败 {}: {}", url, e);
            AppError::FileUnavailable
        })?;
        if bytes.is_empty() {
            tracing::warn!("空文件 {}", url);
            return Err(AppError::FileUnavailable);
        }

        Ok(DownloadedFile {
            file_name: file_name(path).to_string(),
            bytes: bytes.to_vec(),
        })
    }
}

/// 下载并交给 sink 保存，sink 只在成功时调用一次
pub async fn deliver<S: FileSink>(
    client: &DocumentClient,
    state: &str,
    selected: Option<&str>,
    sink: &S,
) -> AppResult<S::Saved> {
    let file = client.download(state, selected).await?;
    sink.save(&file.file_name, file.bytes)
}
