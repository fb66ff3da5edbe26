use std::fs;
use std::path::PathBuf;
use crate::error::{AppError, AppResult};

/// 下载成功后接收文件内容的一方，失败时绝不会被调用
#[cfg_attr(test, mockall::automock(type Saved = ();))]
pub trait FileSink {
    type Saved;

    fn save(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<Self::Saved>;
}

/// 写入本地下载目录，文件名只取基础名
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for DirectorySink {
    type Saved = PathBuf;

    fn save(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<PathBuf> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\'])
        {
            return Err(AppError::InvalidPath(format!("Not a plain file name: {}", file_name)));
        }

        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(file_name);
        fs::write(&target, bytes)?;
        tracing::info!("💾 已保存: {}", target.display());
        Ok(target)
    }
}
