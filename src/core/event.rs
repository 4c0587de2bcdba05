//! 日志事件定义
//!
//! 此模块定义了每次日志调用产生的事件结构，以及严重级别和调用位置。

use chrono::{DateTime, Local};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// 日志严重级别
///
/// 顺序由低到高；`Error` 与 `Fatal` 始终处于激活状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// 所有级别，由低到高
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// 输出与持久化使用的级别名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// 是否始终激活（不受模式开关影响）
    pub fn is_always_active(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Severity::Error,
            tracing::Level::WARN => Severity::Warn,
            tracing::Level::INFO => Severity::Info,
            // DEBUG 与 TRACE
            _ => Severity::Debug,
        }
    }
}

/// 调用位置
///
/// 由调用处推导（见 `slog_info!` 等宏），而不是由用户填写。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// 源文件名（不含目录）
    pub file_name: String,
    /// 行号
    pub line: u32,
    /// 所在函数的短名称
    pub function_name: String,
}

impl SourceLocation {
    /// 从完整文件路径、行号和函数全路径创建调用位置
    pub fn new(file: &str, line: u32, function_path: &str) -> Self {
        Self {
            file_name: base_file_name(file),
            line,
            function_name: short_function_name(function_path),
        }
    }

    /// 无法解析调用位置时使用
    pub fn unknown() -> Self {
        Self {
            file_name: "unknown".to_string(),
            line: 0,
            function_name: "unknown".to_string(),
        }
    }
}

/// 取路径中的文件名部分
pub fn base_file_name(file: &str) -> String {
    // file!() 在 Windows 上可能包含反斜杠
    let normalized = file.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

/// 从 `crate::module::function` 形式的路径中取出函数短名称
///
/// 闭包段（`{{closure}}`）会被跳过，空路径返回 `unknown`。
pub fn short_function_name(path: &str) -> String {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

/// 单次日志调用产生的事件
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// 事件级别
    pub severity: Severity,
    /// 事件时间戳（本地时间）
    pub timestamp: DateTime<Local>,
    /// 日志消息
    pub message: String,
    /// 调用位置
    pub location: SourceLocation,
}

impl LogEvent {
    /// 创建新的事件，时间戳取当前时间
    pub fn new(severity: Severity, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            message: message.into(),
            location,
        }
    }
}
