use anyhow::{Context, Result};
use compliance_forms::config::AppConfig;
use compliance_forms::service::generator;
use compliance_forms::util::time::format_date_time;
use tracing_subscriber::EnvFilter;

/// 部署前手动执行：扫描文档目录，生成 state -> 文件列表映射
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load("config.toml")?;
    let started = format_date_time().unwrap_or_else(|_| "N/A".to_string());
    tracing::info!("开始生成映射 ({})", started);

    let summary = generator::run(&config.generator, true).with_context(|| {
        format!(
            "Mapping generation failed, {} was not written",
            config.generator.output_path.display()
        )
    })?;

    if summary.states == 0 {
        tracing::warn!("⚠️  文档目录下没有任何 state 子目录");
    }

    Ok(())
}
