pub mod artifact;
pub mod walker;

pub use artifact::*;
pub use walker::*;

use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::util::progress::create_spinner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub states: usize,
    pub files: usize,
}

/// 完整的一次生成：遍历、渲染、落盘。遍历失败时不写任何文件
pub fn run(config: &GeneratorConfig, show_progress: bool) -> AppResult<GenerationSummary> {
    tracing::info!("📁 文档根目录: {}", config.document_root.display());

    let mut generator =
        SnapshotGenerator::new(&config.document_root).sort_entries(config.sort_entries);
    if show_progress {
        generator = generator.with_progress(create_spinner("collected"));
    }

    let mapping = generator.generate()?;
    let content = render(&mapping, config.format)?;
    write_atomically(&config.output_path, &content)?;

    let summary = GenerationSummary {
        states: mapping.len(),
        files: mapping.file_count(),
    };
    tracing::info!(
        "✅ Mapping generated → {} ({} states, {} files)",
        config.output_path.display(),
        summary.states,
        summary.files
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArtifactFormat;
    use crate::model::mapping::StateMapping;
    use std::fs;

    #[test]
    fn run_writes_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Compliance");
        fs::create_dir_all(root.join("Delhi").join("Shops")).unwrap();
        fs::write(root.join("Delhi").join("Shops").join("Form A.pdf"), b"%PDF").unwrap();

        let config = GeneratorConfig {
            document_root: root,
            output_path: dir.path().join("mapping.json"),
            format: ArtifactFormat::Json,
            sort_entries: true,
        };

        let summary = run(&config, false).unwrap();
        assert_eq!(summary, GenerationSummary { states: 1, files: 1 });

        let mapping =
            StateMapping::from_json(&fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(mapping.files("Delhi").unwrap(), ["/Shops/Form A.pdf"]);
    }

    #[test]
    fn failed_walk_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            document_root: dir.path().join("missing"),
            output_path: dir.path().join("mapping.js"),
            format: ArtifactFormat::Js,
            sort_entries: false,
        };

        assert!(run(&config, false).is_err());
        assert!(!config.output_path.exists());
    }
}
