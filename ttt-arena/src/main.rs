use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_arena::{run_arena, ArenaConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，stdout 留给统计结果）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_arena=info".parse()?))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ArenaConfig::load(config_path.as_deref())?;

    info!(games = config.games, concurrency = config.concurrency, "井字棋 AI 对战开始");

    let summary = run_arena(config).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
