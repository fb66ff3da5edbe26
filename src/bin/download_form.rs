use anyhow::{bail, Context, Result};
use compliance_forms::config::AppConfig;
use compliance_forms::service::download::{deliver, DirectorySink, DocumentClient};
use tracing_subscriber::EnvFilter;

/// 不经过页面直接下载一份表格到 catalog.download_dir
///
/// 用法: download-form <state> <path>
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(state), path) = (args.next(), args.next()) else {
        bail!("usage: download-form <state> <path>");
    };

    let config = AppConfig::load("config.toml")?;
    let client = DocumentClient::new(&config.document_base())?;
    let sink = DirectorySink::new(&config.catalog.download_dir);

    let saved = deliver(&client, &state, path.as_deref(), &sink)
        .await
        .with_context(|| format!("Failed to download {} {}", state, path.as_deref().unwrap_or_default()))?;

    println!("{}", saved.display());
    Ok(())
}
