//! slog_avp 核心模块
//!
//! 本模块包含事件定义、格式化器、日志器、调用点宏以及 tracing 桥接层。

pub mod event;
pub mod formatter;
pub mod layer;
pub mod logger;
pub mod macros;

// 重新导出核心类型
pub use event::{LogEvent, Severity, SourceLocation};
pub use formatter::RecordFormatter;
pub use layer::LoggerLayer;
pub use logger::{Logger, LoggerBuilder};
