pub mod fs;
pub mod logs;
