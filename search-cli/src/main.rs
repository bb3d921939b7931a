//! 状态空间搜索演示程序
//!
//! 用法: `search-cli [config.json]`

mod config;
mod demo;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("search_cli=info".parse()?))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CliConfig::load(config_path.as_deref())?;
    info!("状态空间搜索演示启动...");

    demo::run_puzzle(&config.puzzle);
    demo::run_game(&config.game)?;

    Ok(())
}
