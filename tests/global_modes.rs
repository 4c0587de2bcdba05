//! 全局模式开关与 `build_logger` 的快照语义
//!
//! 全局注册表在整个测试进程内共享，所以这里只有一个测试函数。

use slog_avp::{build_application, build_logger, mode, HandlerKind, LoggerConfig, Severity};
use tempfile::TempDir;

#[test]
fn test_build_logger_reads_snapshot_of_global_modes() {
    let temp_dir = TempDir::new().unwrap();
    mode::global().apply(LoggerConfig {
        log_dir: temp_dir.path().join("log"),
        ..LoggerConfig::default()
    });

    mode::set_debug_enabled(false);
    let logger = build_logger();
    assert_eq!(logger.handler_kinds(), vec![HandlerKind::Console]);
    assert!(!logger.is_enabled(Severity::Debug));

    // 构建之后的修改不影响已构建的日志器
    mode::set_debug_enabled(true);
    mode::set_console_enabled(false);
    assert!(!logger.is_enabled(Severity::Debug));
    assert!(!logger.config().debug_enabled);
    assert_eq!(
        mode::active_severities(),
        vec![
            Severity::Error,
            Severity::Fatal,
            Severity::Warn,
            Severity::Info,
            Severity::Debug
        ]
    );

    let app = build_application();
    assert_eq!(app.log.handler_kinds(), vec![HandlerKind::RollingFile]);
    assert!(temp_dir.path().join("log").is_dir());

    mode::global().reset();
    assert_eq!(mode::global().snapshot(), LoggerConfig::default());
}
