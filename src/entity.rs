//! 数据实体模块
//!
//! 包含上游原始记录与 gitmoji 输出记录的结构定义。

pub mod prelude;

// === 上游 OpenMoji 数据（只读）===
pub mod raw_emoji;

// === 输出 gitmoji 数据 ===
pub mod mapped_emoji;
