use crate::entity::prelude::*;
use crate::error::WriteError;
use crate::utils::fs::write_file;
use crate::utils::logs::{PipelineLog, Stage};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// 将文档序列化为 4 空格缩进的 JSON，非 ASCII 字符原样输出
pub fn render_document(
    records: &[MappedEmojiRecord],
    schema_url: &str,
) -> Result<Vec<u8>, WriteError> {
    let doc = GitmojiDocument {
        schema: schema_url,
        gitmojis: records,
    };

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// 保存映射结果
///
/// 先在内存中完成序列化，再一次性写入文件，序列化失败时不会触碰目标文件。
pub fn save_to_json(
    records: &[MappedEmojiRecord],
    schema_url: &str,
    path: &Path,
    log: &dyn PipelineLog,
) -> Result<(), WriteError> {
    let contents = render_document(records, schema_url)?;
    write_file(path, &contents)?;
    log.info(Stage::Write, &format!("Emojis saved to {}", path.display()));
    Ok(())
}
