//! OpenMoji 原始记录
//!
//! 上游数据中每个条目包含大量字段，这里只保留映射需要的三个。

use crate::error::MapError;
use serde_json::Value;

/// 上游原始 emoji 记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEmojiRecord {
    /// emoji 字符本身（可能由多个码点组成）
    pub emoji: String,

    /// 十六进制码点序列，例如 `1F600` 或 `1F468-200D-1F4BB`
    pub hexcode: String,

    /// 人类可读的标注
    pub annotation: String,
}

impl RawEmojiRecord {
    /// 从上游 JSON 条目中提取记录
    ///
    /// 缺少字段或字段不是字符串时返回错误，`index` 用于定位出错的条目。
    pub fn from_value(index: usize, value: &Value) -> Result<Self, MapError> {
        Ok(Self {
            emoji: required_str(index, value, "emoji")?,
            hexcode: required_str(index, value, "hexcode")?,
            annotation: required_str(index, value, "annotation")?,
        })
    }
}

fn required_str(index: usize, value: &Value, field: &'static str) -> Result<String, MapError> {
    match value.get(field) {
        None => Err(MapError::MissingField { index, field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(MapError::InvalidField { index, field }),
    }
}
