//! slog_avp - 可配置的日志门面
//!
//! slog_avp 把每条日志分发到控制台、按天命名的日志文件和 SQLite 数据库中的一个或多个，
//! 具体挂载哪些输出由模式开关决定。
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use slog_avp::{build_application, mode, slog_error, slog_info};
//!
//! fn main() {
//!     // 开关必须在构建之前设置
//!     mode::set_persistence_enabled(true);
//!     mode::set_persistence_path("log/app");
//!
//!     let app = build_application();
//!     slog_info!(app.log, "service started on port {}", 8080);
//!     slog_error!(app.log, "disk full");
//! }
//! ```
//!
//! # 显式配置
//!
//! ```rust,no_run
//! use slog_avp::{try_build_logger, LoggerConfig, slog_warn};
//!
//! fn main() -> slog_avp::Result<()> {
//!     let config = LoggerConfig {
//!         console_enabled: false,
//!         debug_enabled: false,
//!         ..Default::default()
//!     };
//!
//!     let logger = try_build_logger(&config)?;
//!     slog_warn!(logger, "written to log/error-DD-MM-YYYY.log");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod mode;
pub mod sinks;
pub mod utils;

// 重新导出主要类型
pub use config::{load_config_from_file, load_config_from_str, LoggerConfig};
pub use diagnostics::{DiagnosticSink, Diagnostics, DiagnosticsSnapshot, StderrDiagnosticSink};
pub use error::{Result, SlogError};

// 重新导出核心功能
pub use crate::core::event::{LogEvent, Severity, SourceLocation};
pub use crate::core::formatter::RecordFormatter;
pub use crate::core::layer::LoggerLayer;
pub use crate::core::logger::{Logger, LoggerBuilder};
pub use sinks::traits::{Handler, HandlerKind};

use std::sync::Arc;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 持有日志器的应用对象
#[derive(Debug)]
pub struct Application {
    pub log: Logger,
}

/// 按指定配置构建日志器
///
/// 数据库打开失败只汇报给诊断输出；文件 handler 的目录或文件无法创建时返回错误。
pub fn try_build_logger(config: &LoggerConfig) -> Result<Logger> {
    Logger::builder().config(config.clone()).build()
}

/// 按全局模式开关构建日志器
///
/// 构建时读取一次开关的快照，之后修改开关不会影响返回的日志器。
/// 回退日志文件无法创建时（[`SlogError::is_fatal`]），向标准错误输出原因并以退出码 1 终止进程。
pub fn build_logger() -> Logger {
    let config = mode::global().snapshot();
    match try_build_logger(&config) {
        Ok(logger) => logger,
        Err(e) if e.is_fatal() => {
            eprintln!("slog_avp: failed to initialise logger: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("slog_avp: logger built without handlers: {}", e);
            Logger::from_handlers(Vec::new(), config, Arc::new(Diagnostics::new()))
        }
    }
}

/// 按全局模式开关构建应用对象，失败行为同 [`build_logger`]
pub fn build_application() -> Application {
    Application { log: build_logger() }
}

/// 按指定配置构建应用对象
pub fn build_application_with_config(config: &LoggerConfig) -> Result<Application> {
    Ok(Application {
        log: try_build_logger(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_build_application_with_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggerConfig {
            console_enabled: false,
            log_dir: temp_dir.path().to_path_buf(),
            ..LoggerConfig::default()
        };

        let app = build_application_with_config(&config).unwrap();
        assert_eq!(app.log.handler_kinds(), vec![HandlerKind::RollingFile]);

        crate::slog_info!(app.log, "boot {}", 1);
        app.log.flush();
        assert_eq!(app.log.diagnostics().snapshot().file_writes, 1);
    }

    #[test]
    fn test_try_build_logger_reports_file_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("log");
        std::fs::write(&blocker, b"file").unwrap();

        let config = LoggerConfig {
            console_enabled: false,
            log_dir: blocker,
            ..LoggerConfig::default()
        };
        let err = try_build_logger(&config).unwrap_err();
        assert_eq!(err.category(), "directory");
    }

    #[test]
    fn test_file_fallback_failure_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("log");
        std::fs::write(&blocker, b"file").unwrap();

        let config = LoggerConfig {
            console_enabled: false,
            log_dir: blocker,
            ..LoggerConfig::default()
        };
        let err = try_build_logger(&config).unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, SlogError::NoOutput { .. }));

        // 控制台开启时不会走文件回退，同样的目录不会导致失败
        let config = LoggerConfig {
            console_enabled: true,
            ..config
        };
        assert!(try_build_logger(&config).is_ok());
    }
}
