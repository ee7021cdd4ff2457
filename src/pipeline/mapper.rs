use crate::entity::prelude::*;
use crate::error::MapError;
use crate::utils::logs::{PipelineLog, Stage};
use serde_json::Value;

/// 将上游记录逐条映射为 gitmoji 结构
///
/// 顺序与数量保持不变；任意一条缺少必需字段时整体失败。
/// 不去重、不排序。
pub fn map_to_schema(
    raw: &[Value],
    log: &dyn PipelineLog,
) -> Result<Vec<MappedEmojiRecord>, MapError> {
    let mapped = raw
        .iter()
        .enumerate()
        .map(|(index, value)| {
            RawEmojiRecord::from_value(index, value).map(|r| MappedEmojiRecord::from_raw(&r))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log.debug(Stage::Map, &format!("mapped {} records", mapped.len()));
    Ok(mapped)
}
