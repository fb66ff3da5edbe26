use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub const GENERAL_CATEGORY: &str = "General";
pub const OTHERS_CATEGORY: &str = "Others";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "DOCX")]
    Docx,
    #[serde(rename = "XLS")]
    Xls,
    #[serde(rename = "FILE")]
    File,
}

impl FileKind {
    /// 按扩展名判断（忽略大小写），只用于展示
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.ends_with(".pdf") {
            FileKind::Pdf
        } else if lower.ends_with(".doc") || lower.ends_with(".docx") {
            FileKind::Docx
        } else if lower.ends_with(".xls") || lower.ends_with(".xlsx") {
            FileKind::Xls
        } else {
            FileKind::File
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Docx => "DOCX",
            FileKind::Xls => "XLS",
            FileKind::File => "FILE",
        }
    }
}

/// Category of a state-qualified path (`/State/...`).
///
/// Three or more segments yield the directory directly under the state, a
/// file sitting directly in the state directory is "General", and anything
/// shorter is "Others".
pub fn derive_category(qualified_path: &str) -> String {
    let parts: Vec<&str> = qualified_path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() >= 3 {
        parts[1].to_string()
    } else if parts.len() == 2 {
        GENERAL_CATEGORY.to_string()
    } else {
        OTHERS_CATEGORY.to_string()
    }
}

pub fn qualify_path(state: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("/{}{}", state, path)
    } else {
        format!("/{}/{}", state, path)
    }
}

pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// 渲染时由路径派生的条目，不落盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub state: String,
    pub path: String,
    pub file_name: String,
    pub category: String,
    pub kind: FileKind,
}

impl CatalogEntry {
    pub fn new(state: &str, path: &str) -> Self {
        Self {
            state: state.to_string(),
            path: path.to_string(),
            file_name: file_name(path).to_string(),
            category: derive_category(&qualify_path(state, path)),
            kind: FileKind::from_path(path),
        }
    }

    pub fn qualified_path(&self) -> String {
        qualify_path(&self.state, &self.path)
    }
}

/// category -> 条目，category 按字典序
pub type GroupedEntries = BTreeMap<String, Vec<CatalogEntry>>;
