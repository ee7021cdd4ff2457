//! gitmoji 输出结构体
//!
//! 字段顺序即序列化顺序，与 gitmoji 的 schema 保持一致。

use super::raw_emoji::RawEmojiRecord;
use serde::Serialize;

/// 映射后的 emoji 记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedEmojiRecord {
    pub emoji: String,

    /// HTML 数字字符引用，例如 `&#x1F600;`
    pub entity: String,

    /// 短代码，例如 `:grinning_face:`
    pub code: String,

    pub description: String,

    pub name: String,

    /// 预留给版本信息，始终为 null
    pub semver: Option<String>,
}

impl MappedEmojiRecord {
    pub fn from_raw(raw: &RawEmojiRecord) -> Self {
        let name = normalize_name(&raw.annotation);
        Self {
            emoji: raw.emoji.clone(),
            entity: format!("&#x{};", raw.hexcode),
            code: format!(":{}:", name),
            description: raw.annotation.clone(),
            name,
            semver: None,
        }
    }
}

/// 空格替换为下划线后转小写
///
/// 只替换 ASCII 空格，其它空白字符保持原样。
pub fn normalize_name(annotation: &str) -> String {
    annotation.replace(' ', "_").to_lowercase()
}

/// 写入磁盘的完整文档
#[derive(Debug, Serialize)]
pub struct GitmojiDocument<'a> {
    #[serde(rename = "$schema")]
    pub schema: &'a str,
    pub gitmojis: &'a [MappedEmojiRecord],
}
