use std::path::{Path, PathBuf};

/// 上游数据源与输出相关常量
pub const SOURCE_URL: &str = "https://openmoji.org/data/openmoji.json.gz";
pub const SCHEMA_URL: &str = "https://gitmoji.dev/api/gitmojis/schema";
pub const OUTPUT_FILE_NAME: &str = "emojis.json";

/// 获取输出文件路径（纯 Rust 版本）
///
/// 输出文件始终位于当前工作目录下
pub fn get_output_path() -> Result<PathBuf, String> {
    let cwd = std::env::current_dir().map_err(|e| format!("无法获取当前工作目录: {}", e))?;
    Ok(get_output_path_in(&cwd))
}

/// 获取指定目录下的输出文件路径
pub fn get_output_path_in(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_ends_with_file_name() {
        let path = get_output_path_in(Path::new("/tmp/work"));
        assert_eq!(path, Path::new("/tmp/work").join("emojis.json"));
    }

    #[test]
    fn output_path_is_inside_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(get_output_path().unwrap(), cwd.join(OUTPUT_FILE_NAME));
    }
}
