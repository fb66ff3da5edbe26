use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub branches: BranchOptions,
    #[serde(default)]
    pub table: TableLayout,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_true")]
    pub cors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// 生成器输出的 JSON 映射文件
    #[serde(default = "default_mapping_path")]
    pub mapping_path: PathBuf,
    /// 文档根目录（state/category/file）
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,
    /// 文档服务器地址，下载时拼接 prefix 与路径
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
    /// 为 true 时本服务在 route_prefix 下直接提供 document_root
    #[serde(default = "default_true")]
    pub serve_documents: bool,
    /// download-form 保存文件的目录
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    #[default]
    Json,
    Js,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,
    #[serde(default = "default_mapping_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub format: ArtifactFormat,
    /// 默认保持目录读取顺序；打开后同级条目按文件名排序
    #[serde(default)]
    pub sort_entries: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchOptions {
    #[serde(default = "default_branches")]
    pub branches: Vec<String>,
    #[serde(default = "default_branch_states")]
    pub states: Vec<String>,
}

/// 表头对齐参数，来自单一的表格模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    #[serde(default = "default_total_columns")]
    pub total_columns: usize,
    #[serde(default = "default_start_index")]
    pub start_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_log_file")]
    pub file_name: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_mapping_path() -> PathBuf {
    PathBuf::from("stateExcelMapping.json")
}

fn default_document_root() -> PathBuf {
    PathBuf::from("public/Compliance")
}

fn default_origin() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_route_prefix() -> String {
    "/Compliance".to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_session_idle_secs() -> u64 {
    1800
}

fn default_branches() -> Vec<String> {
    [
        "Mumbai Branch",
        "Pune Branch",
        "Ahmedabad Branch",
        "Bangalore Branch",
        "Delhi Branch",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_branch_states() -> Vec<String> {
    ["Maharashtra", "Gujarat", "Karnataka", "Delhi"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_total_columns() -> usize {
    32
}

fn default_start_index() -> usize {
    8
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_file() -> String {
    "compliance_forms.log".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            mapping_path: default_mapping_path(),
            document_root: default_document_root(),
            origin: default_origin(),
            route_prefix: default_route_prefix(),
            serve_documents: true,
            download_dir: default_download_dir(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            document_root: default_document_root(),
            output_path: default_mapping_path(),
            format: ArtifactFormat::default(),
            sort_entries: false,
        }
    }
}

impl Default for BranchOptions {
    fn default() -> Self {
        Self {
            branches: default_branches(),
            states: default_branch_states(),
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            total_columns: default_total_columns(),
            start_index: default_start_index(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file_name: default_log_file(),
        }
    }
}

impl AppConfig {
    /// 加载配置：可选的配置文件，再叠加 COMPLIANCE_ 前缀的环境变量
    pub fn load(path: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("COMPLIANCE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to load config")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    /// 下载地址 = origin + route_prefix，去掉多余的斜杠
    pub fn document_base(&self) -> String {
        format!(
            "{}/{}",
            self.catalog.origin.trim_end_matches('/'),
            self.catalog.route_prefix.trim_matches('/')
        )
    }
}
