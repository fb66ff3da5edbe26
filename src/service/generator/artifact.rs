use std::fs;
use std::path::{Path, PathBuf};
use crate::config::ArtifactFormat;
use crate::error::AppResult;
use crate::model::mapping::StateMapping;

pub const JS_EXPORT_NAME: &str = "stateExcelMapping";

pub fn render(mapping: &StateMapping, format: ArtifactFormat) -> AppResult<String> {
    match format {
        ArtifactFormat::Json => Ok(serde_json::to_string_pretty(mapping)?),
        ArtifactFormat::Js => render_js(mapping),
    }
}

/// 可直接被页面 import 的字面量声明
fn render_js(mapping: &StateMapping) -> AppResult<String> {
    let mut output = format!("export const {} = {{\n", JS_EXPORT_NAME);

    for (state, files) in mapping.iter() {
        output.push_str(&format!("  {}: [\n", serde_json::to_string(state)?));
        for file in files {
            output.push_str(&format!("    {},\n", serde_json::to_string(file)?));
        }
        output.push_str("  ],\n");
    }

    output.push_str("};\n");
    Ok(output)
}

/// 先写临时文件再 rename，失败时目标路径上不会留下半成品
pub fn write_atomically(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
