//! 获取 → 映射 → 写入 三段式流水线
//!
//! 各阶段严格顺序执行；获取失败时记录错误并跳过后续阶段。

pub mod fetch;
pub mod mapper;
pub mod writer;

use crate::error::GenError;
use crate::utils::logs::{PipelineLog, Stage};
use fetch::Fetcher;
use std::path::Path;

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 已写入指定数量的记录
    Saved { count: usize },
    /// 没有可用数据（获取失败或上游为空），未写入任何文件
    NoData,
}

pub async fn run_pipeline(
    fetcher: &Fetcher,
    schema_url: &str,
    output_path: &Path,
    log: &dyn PipelineLog,
) -> Result<Outcome, GenError> {
    log.info(Stage::Pipeline, "Fetching OpenMoji data...");
    let raw = match fetcher.fetch(log).await {
        Ok(raw) => raw,
        Err(e) => {
            log.error(Stage::Fetch, &e.to_string());
            return Ok(Outcome::NoData);
        }
    };

    if raw.is_empty() {
        log.warn(
            Stage::Fetch,
            &format!("No emoji records returned from {}", fetcher.url()),
        );
        return Ok(Outcome::NoData);
    }

    log.info(Stage::Pipeline, "Mapping emojis to the required schema...");
    let mapped = mapper::map_to_schema(&raw, log)?;

    log.info(
        Stage::Pipeline,
        &format!("Saving mapped emojis to {}...", output_path.display()),
    );
    writer::save_to_json(&mapped, schema_url, output_path, log)?;

    log.info(Stage::Pipeline, "Emojis fetched, mapped, and saved successfully.");
    Ok(Outcome::Saved {
        count: mapped.len(),
    })
}
