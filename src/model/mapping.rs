use std::collections::BTreeMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{AppError, AppResult};

/// state 名称 -> 该目录下全部文件的相对路径（以 `/` 开头）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateMapping {
    states: BTreeMap<String, Vec<String>>,
}

impl StateMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: impl Into<String>, files: Vec<String>) {
        self.states.insert(state.into(), files);
    }

    /// 已排序的 state 名称
    pub fn state_names(&self) -> Vec<String> {
        self.states.keys().cloned().collect()
    }

    pub fn files(&self, state: &str) -> Option<&[String]> {
        self.states.get(state).map(|files| files.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.states.values().map(Vec::len).sum()
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 启动时加载一次生成器输出的 JSON 文件
    pub async fn load(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::InvalidPath(format!("Failed to read mapping {:?}: {}", path, e))
        })?;
        Self::from_json(&content)
    }
}
