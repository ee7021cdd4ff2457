//! 预导入模块
//!
//! 提供常用类型的快捷导入。

pub use super::mapped_emoji::{GitmojiDocument, MappedEmojiRecord};
pub use super::raw_emoji::RawEmojiRecord;
