//! 运行配置
//!
//! 所有取值来自编译期常量，不读取环境变量或命令行参数。

use crate::utils::fs::{get_output_path, SCHEMA_URL, SOURCE_URL};
use crate::utils::logs::LogLevel;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// OpenMoji 数据地址
    pub source_url: Url,
    /// 写入文档的 `$schema` 值
    pub schema_url: String,
    /// 输出文件路径
    pub output_path: PathBuf,
    pub log_level: LogLevel,
}

impl Config {
    /// 使用默认常量构建配置，输出到当前工作目录
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            source_url: parse_source_url(SOURCE_URL)?,
            schema_url: SCHEMA_URL.to_string(),
            output_path: get_output_path()?,
            log_level: LogLevel::Info,
        })
    }
}

/// 使用 `url` crate 校验数据源地址
pub fn parse_source_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("无效的数据源地址 {}: {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("不支持的协议 {}: {}", other, raw)),
    }
}
