use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use walkdir::WalkDir;
use crate::error::{AppError, AppResult};
use crate::model::mapping::StateMapping;
use crate::util::path::to_portable_path;

/// 把 `root/state/**/file` 展平成 state -> 相对路径列表
pub struct SnapshotGenerator {
    root: PathBuf,
    sort_entries: bool,
    progress: Option<ProgressBar>,
}

impl SnapshotGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sort_entries: false,
            progress: None,
        }
    }

    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    /// 任何读取错误都会直接返回，不产生部分结果
    pub fn generate(&self) -> AppResult<StateMapping> {
        let result = self.collect_states();

        if let Some(pb) = &self.progress {
            match &result {
                Ok(mapping) => pb.finish_with_message(format!("{} states", mapping.len())),
                Err(e) => pb.abandon_with_message(format!("failed: {}", e)),
            }
        }

        result
    }

    fn collect_states(&self) -> AppResult<StateMapping> {
        let mut mapping = StateMapping::new();

        for entry in self.walker(&self.root).min_depth(1).max_depth(1) {
            let entry = entry?;
            // 根目录下的普通文件不属于任何 state
            if !entry.file_type().is_dir() {
                tracing::debug!("跳过根目录文件: {}", entry.path().display());
                continue;
            }

            let state = entry
                .file_name()
                .to_str()
                .ok_or_else(|| {
                    AppError::InvalidPath(format!("State name is not UTF-8: {:?}", entry.path()))
                })?
                .to_string();
            let files = self.collect_files(entry.path())?;
            tracing::debug!("state {} 共 {} 个文件", state, files.len());
            mapping.insert(state, files);
        }

        Ok(mapping)
    }

    /// 深度优先，子目录的内容紧跟在目录本身之后
    fn collect_files(&self, state_dir: &Path) -> AppResult<Vec<String>> {
        let mut files = Vec::new();

        for entry in self.walker(state_dir).min_depth(1) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            files.push(to_portable_path(entry.path(), state_dir)?);
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        Ok(files)
    }

    fn walker(&self, dir: &Path) -> WalkDir {
        let walker = WalkDir::new(dir).follow_links(true);
        if self.sort_entries {
            walker.sort_by_file_name()
        } else {
            walker
        }
    }
}
