use std::sync::Arc;
use serde::Serialize;
use crate::error::{AppError, AppResult};
use crate::model::catalog::{CatalogEntry, GroupedEntries};
use crate::model::mapping::StateMapping;
use super::grouping::group_entries;
use super::search::filter_files;

/// 进程内只读的文档目录，启动时加载一次
#[derive(Debug, Clone)]
pub struct Catalog {
    mapping: Arc<StateMapping>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub state: String,
    pub query: String,
    pub total: usize,
    pub matched: usize,
    pub categories: GroupedEntries,
}

impl Catalog {
    pub fn new(mapping: StateMapping) -> Self {
        Self {
            mapping: Arc::new(mapping),
        }
    }

    pub fn states(&self) -> Vec<String> {
        self.mapping.state_names()
    }

    pub fn files(&self, state: &str) -> Option<&[String]> {
        self.mapping.files(state)
    }

    pub fn state_count(&self) -> usize {
        self.mapping.len()
    }

    pub fn file_count(&self) -> usize {
        self.mapping.file_count()
    }

    /// 过滤后按 category 分组
    pub fn browse(&self, state: &str, query: &str) -> AppResult<CatalogView> {
        let files = self
            .files(state)
            .ok_or_else(|| AppError::StateNotFound(state.to_string()))?;

        let filtered = filter_files(files, query);
        let matched = filtered.len();
        let categories = group_entries(filtered.into_iter().map(|path| CatalogEntry::new(state, path)));

        Ok(CatalogView {
            state: state.to_string(),
            query: query.to_string(),
            total: files.len(),
            matched,
            categories,
        })
    }
}
