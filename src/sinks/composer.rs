//! Handler 组合器
//!
//! 根据配置快照决定日志器挂载哪些 handler：
//!
//! | console | persistence | handlers |
//! |---|---|---|
//! | 开 | 开 | 持久化 + 控制台 |
//! | 开 | 关 | 控制台 |
//! | 关 | 开 | 持久化 |
//! | 关 | 关 | 按天命名的文件 |
//!
//! 数据库打开失败只汇报给诊断输出，不中断构建；此时若控制台也关闭，
//! 则挂载文件 handler，保证日志器至少有一个输出。

use crate::config::LoggerConfig;
use crate::core::formatter::RecordFormatter;
use crate::diagnostics::Diagnostics;
use crate::error::{Result, SlogError};
use crate::sinks::console::ConsoleHandler;
use crate::sinks::database::{PersistenceHandler, PersistenceSink};
use crate::sinks::rolling_file::RollingFileHandler;
use crate::sinks::traits::{Handler, SeverityFilter};

use std::fmt;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Handler 组合器
pub struct HandlerComposer<'a> {
    config: &'a LoggerConfig,
    console_writer: Option<Box<dyn Write + Send>>,
}

impl<'a> HandlerComposer<'a> {
    pub fn new(config: &'a LoggerConfig) -> Self {
        Self {
            config,
            console_writer: None,
        }
    }

    /// 控制台输出改写到指定写入器（默认标准输出）
    pub fn with_console_writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.console_writer = Some(writer);
        self
    }

    /// 构建 handler 列表
    ///
    /// 数据库失败不会返回错误；文件 handler 的目录或文件打开失败返回 `NoOutput`。
    pub fn compose(self, diagnostics: &Diagnostics) -> Result<Vec<Box<dyn Handler>>> {
        let config = self.config;
        let filter = SeverityFilter::new(config.active_severities());
        let mut handlers: Vec<Box<dyn Handler>> = Vec::new();

        let mut persistence_attached = false;
        if config.persistence_enabled {
            let sink = PersistenceSink::new(&config.persistence_path);
            match sink.open() {
                Ok(()) => {
                    handlers.push(Box::new(PersistenceHandler::new(
                        Arc::new(sink),
                        filter.clone(),
                    )));
                    persistence_attached = true;
                }
                Err(e) => diagnostics.report_failure("persistence", &e),
            }
        }

        if config.console_enabled {
            let formatter = RecordFormatter::new().with_color(config.color_enabled);
            let console = match self.console_writer {
                Some(writer) => ConsoleHandler::with_writer(filter.clone(), formatter, writer),
                None => ConsoleHandler::stdout(filter.clone(), formatter),
            };
            handlers.push(Box::new(console));
        } else if !persistence_attached {
            if config.persistence_enabled {
                debug!("persistence unavailable, falling back to daily log file");
            }
            let file = RollingFileHandler::open(&config.log_dir, filter, RecordFormatter::new())
                .map_err(SlogError::no_output)?;
            handlers.push(Box::new(file));
        }

        let names: Vec<&str> = handlers.iter().map(|h| h.name()).collect();
        info!(handlers = ?names, "logger handlers composed");
        Ok(handlers)
    }
}

impl fmt::Debug for HandlerComposer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerComposer")
            .field("config", self.config)
            .field("console_writer", &self.console_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Severity;
    use crate::error::SlogError;
    use crate::sinks::traits::HandlerKind;
    use std::fs;
    use std::io;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn quiet_diagnostics() -> Diagnostics {
        Diagnostics::with_sink(Arc::new(|_: &str, _: &SlogError| {}))
    }

    fn test_config(temp_dir: &TempDir, console: bool, persistence: bool) -> LoggerConfig {
        LoggerConfig {
            console_enabled: console,
            persistence_enabled: persistence,
            persistence_path: temp_dir
                .path()
                .join("store.db")
                .to_string_lossy()
                .into_owned(),
            log_dir: temp_dir.path().join("log"),
            ..LoggerConfig::default()
        }
    }

    fn kinds(handlers: &[Box<dyn Handler>]) -> Vec<HandlerKind> {
        handlers.iter().map(|h| h.kind()).collect()
    }

    fn compose(config: &LoggerConfig, diagnostics: &Diagnostics) -> Vec<Box<dyn Handler>> {
        HandlerComposer::new(config)
            .with_console_writer(Box::new(io::sink()))
            .compose(diagnostics)
            .unwrap()
    }

    #[test]
    fn test_composition_table() {
        let diagnostics = quiet_diagnostics();
        let cases = [
            (true, true, vec![HandlerKind::Persistence, HandlerKind::Console]),
            (true, false, vec![HandlerKind::Console]),
            (false, true, vec![HandlerKind::Persistence]),
            (false, false, vec![HandlerKind::RollingFile]),
        ];

        for (console, persistence, expected) in cases {
            let temp_dir = TempDir::new().unwrap();
            let config = test_config(&temp_dir, console, persistence);
            let handlers = compose(&config, &diagnostics);
            assert_eq!(kinds(&handlers), expected, "console={console} persistence={persistence}");
        }
        assert_eq!(diagnostics.snapshot().sink_errors, 0);
    }

    #[test]
    fn test_handlers_share_active_severities() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir, true, true);
        config.debug_enabled = false;
        config.warn_enabled = false;

        let handlers = compose(&config, &quiet_diagnostics());
        for handler in &handlers {
            assert_eq!(
                handler.metadata().severities,
                vec![Severity::Info, Severity::Error, Severity::Fatal]
            );
        }
    }

    #[test]
    fn test_persistence_failure_is_reported_not_returned() {
        let temp_dir = TempDir::new().unwrap();
        let corrupt = temp_dir.path().join("corrupt.db");
        fs::write(&corrupt, vec![b'x'; 4096]).unwrap();

        let reports = Arc::new(Mutex::new(Vec::new()));
        let collected = Arc::clone(&reports);
        let diagnostics = Diagnostics::with_sink(Arc::new(move |source: &str, error: &SlogError| {
            collected
                .lock()
                .unwrap()
                .push((source.to_string(), error.category()));
        }));

        let mut config = test_config(&temp_dir, true, true);
        config.persistence_path = corrupt.to_string_lossy().into_owned();

        let handlers = compose(&config, &diagnostics);
        assert_eq!(kinds(&handlers), vec![HandlerKind::Console]);
        assert_eq!(
            *reports.lock().unwrap(),
            vec![("persistence".to_string(), "persistence")]
        );
    }

    #[test]
    fn test_persistence_failure_without_console_falls_back_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let corrupt = temp_dir.path().join("corrupt.db");
        fs::write(&corrupt, vec![b'x'; 4096]).unwrap();

        let mut config = test_config(&temp_dir, false, true);
        config.persistence_path = corrupt.to_string_lossy().into_owned();

        let diagnostics = quiet_diagnostics();
        let handlers = compose(&config, &diagnostics);
        assert_eq!(kinds(&handlers), vec![HandlerKind::RollingFile]);
        assert_eq!(diagnostics.snapshot().sink_errors, 1);
    }

    #[test]
    fn test_file_fallback_failure_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("log");
        fs::write(&blocker, b"not a directory").unwrap();

        let config = test_config(&temp_dir, false, false);
        let result = HandlerComposer::new(&config).compose(&quiet_diagnostics());
        let err = result.unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(
            err,
            SlogError::NoOutput { ref source } if matches!(**source, SlogError::DirectoryCreation { .. })
        ));
    }
}
