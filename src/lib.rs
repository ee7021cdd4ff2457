pub mod config;
pub mod entity;
pub mod error;
pub mod pipeline;
pub mod utils;

use config::Config;
use error::GenError;
use pipeline::{fetch::Fetcher, run_pipeline, Outcome};
use utils::logs::{current_log_level, init_logger, LogFacade};

/// 命令行入口：读取默认配置，初始化日志，顺序执行流水线
pub fn run() -> Result<Outcome, GenError> {
    let config = Config::load().map_err(GenError::Startup)?;
    init_logger(config.log_level).map_err(GenError::Startup)?;
    log::debug!("日志级别: {:?}", current_log_level());

    run_with_config(&config)
}

/// 使用给定配置执行一次完整流水线（不初始化日志）
pub fn run_with_config(config: &Config) -> Result<Outcome, GenError> {
    // 单线程运行时，整个流程按顺序阻塞执行
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| GenError::Startup(format!("无法创建异步运行时: {}", e)))?;

    let fetcher = Fetcher::with_default_client(config.source_url.clone())
        .map_err(|e| GenError::Startup(e.to_string()))?;

    runtime.block_on(run_pipeline(
        &fetcher,
        &config.schema_url,
        &config.output_path,
        &LogFacade,
    ))
}
