use anyhow::{Context, Result};
use compliance_forms::api;
use compliance_forms::config::AppConfig;
use compliance_forms::model::mapping::StateMapping;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt, Layer};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置（日志目录也在配置里）
    let config = AppConfig::load("config.toml")?;

    let log_dir = &config.logging.dir;
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    // 配置日志文件（按日期滚动）
    let file_appender = tracing_appender::rolling::daily(log_dir, &config.logging.file_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // 控制台输出层（带颜色）
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(env_filter());

    // 文件输出层（无颜色）
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "日志文件位置: {}/{}",
        log_dir.display(),
        config.logging.file_name
    );

    // 映射文件只在启动时读取一次
    let mapping = StateMapping::load(&config.catalog.mapping_path)
        .await
        .with_context(|| {
            format!(
                "Failed to load mapping {}, run generate-mapping first",
                config.catalog.mapping_path.display()
            )
        })?;
    tracing::info!(
        "已加载 {} 个 state，共 {} 个文件",
        mapping.len(),
        mapping.file_count()
    );

    let bind = config.server.bind.clone();
    let app_state = api::AppState::new(config, mapping)?;
    let app = api::routes::create_router(app_state);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!("Server listening on {}", bind);
    axum::serve(listener, app).await?;

    Ok(())
}
