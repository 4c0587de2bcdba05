//! slog_avp Handlers 模块
//!
//! 提供各种日志输出目标的实现，包括控制台、按天命名的文件和 SQLite 数据库，
//! 以及根据配置组合它们的 [`HandlerComposer`]。

pub mod composer;
pub mod console;
pub mod database;
pub mod rolling_file;
pub mod traits;

// 重新导出主要类型
pub use composer::HandlerComposer;
pub use console::ConsoleHandler;
pub use database::{PersistenceHandler, PersistenceSink};
pub use rolling_file::RollingFileHandler;
pub use traits::{Handler, HandlerKind, HandlerMetadata, SeverityFilter};
