use crate::error::WriteError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// ==================== 路径相关常量（重导出） ====================

pub use emoji_path::{get_output_path, get_output_path_in, OUTPUT_FILE_NAME, SCHEMA_URL, SOURCE_URL};

// ==================== 文件操作相关 ====================

/// 将内容整体写入文件
///
/// 已存在的文件会被截断覆盖；文件句柄在函数返回前关闭，
/// 不会创建缺失的父目录。
pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    let io_err = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
