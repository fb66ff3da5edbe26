use std::path::{Component, Path};
use crate::error::{AppError, AppResult};

/// 去掉 base 前缀，统一成以 `/` 开头、`/` 分隔的相对路径
pub fn to_portable_path(path: &Path, base: &Path) -> AppResult<String> {
    let relative = path.strip_prefix(base).map_err(|_| {
        AppError::InvalidPath(format!("{:?} is not under {:?}", path, base))
    })?;

    let mut portable = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| {
                AppError::InvalidPath(format!("{:?} is not valid UTF-8", path))
            })?;
            portable.push('/');
            portable.push_str(&part.replace('\\', "/"));
        }
    }

    if portable.is_empty() {
        return Err(AppError::InvalidPath(format!("{:?} has no relative part", path)));
    }

    Ok(portable)
}

/// 请求里带来的相对路径不能跳出文档根目录
pub fn validate_relative(path: &str) -> AppResult<()> {
    let escapes = path
        .split(['/', '\\'])
        .any(|segment| segment == "..");
    if escapes {
        return Err(AppError::InvalidPath(format!("Path outside document root: {}", path)));
    }
    Ok(())
}
