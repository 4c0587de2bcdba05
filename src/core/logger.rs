//! 日志器
//!
//! `Logger` 持有构建时组合好的 handler 列表。每次调用生成一个 [`LogEvent`]，
//! 交给所有处理该级别的 handler。handler 的错误汇报给 [`Diagnostics`]，
//! 日志调用本身永远不会失败。

use crate::config::LoggerConfig;
use crate::core::event::{LogEvent, Severity, SourceLocation};
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::error::Result;
use crate::sinks::composer::HandlerComposer;
use crate::sinks::traits::{Handler, HandlerKind};

use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// 日志器
pub struct Logger {
    handlers: Vec<Box<dyn Handler>>,
    diagnostics: Arc<Diagnostics>,
    config: LoggerConfig,
}

impl Logger {
    /// 创建构建器
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// 直接使用给定的 handler 列表创建日志器
    pub fn from_handlers(
        handlers: Vec<Box<dyn Handler>>,
        config: LoggerConfig,
        diagnostics: Arc<Diagnostics>,
    ) -> Self {
        Self {
            handlers,
            diagnostics,
            config,
        }
    }

    /// 记录一条消息
    pub fn log(&self, severity: Severity, message: impl Into<String>, location: SourceLocation) {
        self.log_event(&LogEvent::new(severity, message, location));
    }

    /// 分发一个已经构造好的事件
    pub fn log_event(&self, event: &LogEvent) {
        self.diagnostics.increment_events_processed();

        for handler in &self.handlers {
            if !handler.is_handling(event.severity) {
                continue;
            }

            match handler.handle(event) {
                Ok(()) => match handler.kind() {
                    HandlerKind::Console => self.diagnostics.increment_console_writes(),
                    HandlerKind::RollingFile => self.diagnostics.increment_file_writes(),
                    HandlerKind::Persistence => self.diagnostics.increment_persisted_rows(),
                    HandlerKind::Custom => {}
                },
                Err(e) => self.diagnostics.report_failure(handler.name(), &e),
            }
        }
    }

    pub fn debug(&self, message: impl Into<String>, location: SourceLocation) {
        self.log(Severity::Debug, message, location);
    }

    pub fn info(&self, message: impl Into<String>, location: SourceLocation) {
        self.log(Severity::Info, message, location);
    }

    pub fn warn(&self, message: impl Into<String>, location: SourceLocation) {
        self.log(Severity::Warn, message, location);
    }

    pub fn error(&self, message: impl Into<String>, location: SourceLocation) {
        self.log(Severity::Error, message, location);
    }

    /// 记录 Fatal 消息后返回，不会终止进程
    pub fn fatal(&self, message: impl Into<String>, location: SourceLocation) {
        self.log(Severity::Fatal, message, location);
    }

    /// 该级别是否至少有一个 handler 处理
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.handlers.iter().any(|h| h.is_handling(severity))
    }

    /// 刷新所有 handler，失败汇报给诊断输出
    pub fn flush(&self) {
        for handler in &self.handlers {
            if let Err(e) = handler.flush() {
                self.diagnostics.report_failure(handler.name(), &e);
            }
        }
    }

    /// 按挂载顺序列出 handler 种类
    pub fn handler_kinds(&self) -> Vec<HandlerKind> {
        self.handlers.iter().map(|h| h.kind()).collect()
    }

    pub fn handlers(&self) -> &[Box<dyn Handler>] {
        &self.handlers
    }

    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// 构建时使用的配置快照
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handlers", &self.handlers)
            .field("diagnostics", &self.diagnostics)
            .field("config", &self.config)
            .finish()
    }
}

/// 日志器构建器
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    diagnostic_sink: Option<Arc<dyn DiagnosticSink>>,
    console_writer: Option<Box<dyn Write + Send>>,
    extra_handlers: Vec<Box<dyn Handler>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置配置快照
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置诊断输出（默认标准错误）
    pub fn diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostic_sink = Some(sink);
        self
    }

    /// 控制台输出改写到指定写入器
    pub fn console_writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.console_writer = Some(writer);
        self
    }

    /// 在组合出的 handler 之后追加自定义 handler
    pub fn handler(mut self, handler: Box<dyn Handler>) -> Self {
        self.extra_handlers.push(handler);
        self
    }

    /// 组合 handler 并创建日志器
    ///
    /// 只有文件 handler 的目录或文件打开失败会返回错误。
    pub fn build(self) -> Result<Logger> {
        let diagnostics = Arc::new(match self.diagnostic_sink {
            Some(sink) => Diagnostics::with_sink(sink),
            None => Diagnostics::new(),
        });

        let mut composer = HandlerComposer::new(&self.config);
        if let Some(writer) = self.console_writer {
            composer = composer.with_console_writer(writer);
        }
        let mut handlers = composer.compose(&diagnostics)?;
        handlers.extend(self.extra_handlers);

        Ok(Logger::from_handlers(handlers, self.config, diagnostics))
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("diagnostic_sink", &self.diagnostic_sink.is_some())
            .field("console_writer", &self.console_writer.is_some())
            .field("extra_handlers", &self.extra_handlers)
            .finish()
    }
}
