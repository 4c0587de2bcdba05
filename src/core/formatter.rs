//! 记录格式化器
//!
//! 将一条日志事件渲染为单行文本：
//!
//! ```text
//! [SEVERITY] [YYYY-MM-DD HH:MM:SS] [filename:line,function] [message]
//! ```

use crate::core::event::{LogEvent, Severity};
use colored::Colorize;

/// 时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 记录格式化器
///
/// 纯函数式的渲染，不做任何 I/O。控制台可选择为级别标签着色。
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    color_enabled: bool,
}

impl RecordFormatter {
    /// 创建不着色的格式化器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否为级别标签着色
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// 是否着色
    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// 渲染事件，结果以换行符结尾
    pub fn render(&self, event: &LogEvent) -> String {
        let level = format!("[{}]", event.severity);
        let level = if self.color_enabled {
            Self::colorize_level(&level, event.severity)
        } else {
            level
        };

        format!(
            "{} [{}] [{}:{},{}] [{}]\n",
            level,
            event.timestamp.format(TIMESTAMP_FORMAT),
            event.location.file_name,
            event.location.line,
            event.location.function_name,
            event.message
        )
    }

    fn colorize_level(level: &str, severity: Severity) -> String {
        match severity {
            Severity::Debug => level.cyan().to_string(),
            Severity::Info => level.green().to_string(),
            Severity::Warn => level.yellow().to_string(),
            Severity::Error => level.red().to_string(),
            Severity::Fatal => level.red().bold().to_string(),
        }
    }
}
