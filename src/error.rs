//! 流水线错误类型
//!
//! 每个阶段各有一个错误类型，`GenError` 汇总它们供 `run` 返回。

use std::fmt;
use std::path::PathBuf;

// ==================== 获取阶段 ====================

#[derive(Debug)]
pub enum FetchError {
    /// HTTP 客户端构建失败
    Client(String),
    /// 响应状态码不是 200
    Status { url: String, status: u16 },
    /// 网络层失败（连接、TLS、解压等）
    Network { url: String, message: String },
    /// 响应体不是合法 JSON 或顶层不是数组
    Decode { url: String, message: String },
}

impl std::error::Error for FetchError {}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            FetchError::Client(msg) => write!(f, "无法创建 HTTP 客户端: {}", msg),
            FetchError::Status { url, status } => {
                write!(f, "获取数据失败 {} (HTTP {})", url, status)
            }
            FetchError::Network { url, message } => {
                write!(f, "获取数据失败 {}: {}", url, message)
            }
            FetchError::Decode { url, message } => {
                write!(f, "无效的 JSON 数据 {}: {}", url, message)
            }
        }
    }
}

// ==================== 映射阶段 ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    MissingField { index: usize, field: &'static str },
    InvalidField { index: usize, field: &'static str },
}

impl std::error::Error for MapError {}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            MapError::MissingField { index, field } => {
                write!(f, "第 {} 条记录缺少必需字段 `{}`", index, field)
            }
            MapError::InvalidField { index, field } => {
                write!(f, "第 {} 条记录的字段 `{}` 不是字符串", index, field)
            }
        }
    }
}

// ==================== 写入阶段 ====================

#[derive(Debug)]
pub enum WriteError {
    Serialize(serde_json::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Serialize(e) => Some(e),
            WriteError::Io { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            WriteError::Serialize(e) => write!(f, "序列化 JSON 失败: {}", e),
            WriteError::Io { path, source } => {
                write!(f, "无法写入文件 {}: {}", path.display(), source)
            }
        }
    }
}

impl From<serde_json::Error> for WriteError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

// ==================== 汇总 ====================

#[derive(Debug)]
pub enum GenError {
    /// 运行时、配置等启动阶段失败
    Startup(String),
    Fetch(FetchError),
    Map(MapError),
    Write(WriteError),
}

impl std::error::Error for GenError {}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            GenError::Startup(msg) => write!(f, "启动失败: {}", msg),
            GenError::Fetch(e) => write!(f, "{}", e),
            GenError::Map(e) => write!(f, "映射失败: {}", e),
            GenError::Write(e) => write!(f, "{}", e),
        }
    }
}

impl From<FetchError> for GenError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<MapError> for GenError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<WriteError> for GenError {
    fn from(e: WriteError) -> Self {
        Self::Write(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = FetchError::Status {
            url: "https://openmoji.org/data/openmoji.json.gz".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "获取数据失败 https://openmoji.org/data/openmoji.json.gz (HTTP 404)"
        );
    }

    #[test]
    fn map_error_converts_into_gen_error() {
        let err: GenError = MapError::MissingField {
            index: 3,
            field: "emoji",
        }
        .into();
        assert!(matches!(err, GenError::Map(_)));
        assert_eq!(err.to_string(), "映射失败: 第 3 条记录缺少必需字段 `emoji`");
    }
}
