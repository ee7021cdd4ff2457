use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl From<log::LevelFilter> for LogLevel {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Warn => LogLevel::Warn,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Debug => LogLevel::Debug,
            log::LevelFilter::Trace => LogLevel::Trace,
            log::LevelFilter::Off => LogLevel::Off,
        }
    }
}

/// 初始化日志后端
///
/// 级别由调用方显式给出，不读取 `RUST_LOG`。重复初始化会返回错误。
pub fn init_logger(level: LogLevel) -> Result<(), String> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level.to_filter())
        .try_init()
        .map_err(|e| format!("无法初始化日志: {}", e))
}

/// 获取当前日志级别
pub fn current_log_level() -> LogLevel {
    log::max_level().into()
}

// ==================== 注入式日志接口 ====================

/// 流水线阶段，作为日志的 target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Map,
    Write,
    Pipeline,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "emoji_gen::fetch",
            Stage::Map => "emoji_gen::map",
            Stage::Write => "emoji_gen::write",
            Stage::Pipeline => "emoji_gen::pipeline",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// 各阶段通过该接口输出进度，而不是直接依赖全局 logger
pub trait PipelineLog {
    fn log(&self, stage: Stage, level: log::Level, message: &str);

    fn info(&self, stage: Stage, message: &str) {
        self.log(stage, log::Level::Info, message);
    }

    fn warn(&self, stage: Stage, message: &str) {
        self.log(stage, log::Level::Warn, message);
    }

    fn error(&self, stage: Stage, message: &str) {
        self.log(stage, log::Level::Error, message);
    }

    fn debug(&self, stage: Stage, message: &str) {
        self.log(stage, log::Level::Debug, message);
    }
}

/// 转发到 `log` 门面
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl PipelineLog for LogFacade {
    fn log(&self, stage: Stage, level: log::Level, message: &str) {
        log::log!(target: stage.as_str(), level, "{}", message);
    }
}
