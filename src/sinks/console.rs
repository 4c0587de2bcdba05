//! 控制台输出 Handler 实现
//!
//! 将渲染后的日志行写到标准输出（或测试时注入的任意写入器）。

use crate::core::event::{LogEvent, Severity};
use crate::core::formatter::RecordFormatter;
use crate::error::Result;
use crate::sinks::traits::{Handler, HandlerKind, SeverityFilter};

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// 控制台输出 Handler
pub struct ConsoleHandler {
    formatter: RecordFormatter,
    filter: SeverityFilter,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleHandler {
    /// 创建写到标准输出的控制台 Handler
    pub fn stdout(filter: SeverityFilter, formatter: RecordFormatter) -> Self {
        Self::with_writer(filter, formatter, Box::new(io::stdout()))
    }

    /// 使用自定义写入器创建控制台 Handler
    pub fn with_writer(
        filter: SeverityFilter,
        formatter: RecordFormatter,
        writer: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            formatter,
            filter,
            writer: Mutex::new(writer),
        }
    }

    /// 获取格式化器
    pub fn formatter(&self) -> &RecordFormatter {
        &self.formatter
    }
}

impl Handler for ConsoleHandler {
    fn handle(&self, event: &LogEvent) -> Result<()> {
        let line = self.formatter.render(event);

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn is_handling(&self, severity: Severity) -> bool {
        self.filter.allows(severity)
    }

    fn kind(&self) -> HandlerKind {
        HandlerKind::Console
    }

    fn name(&self) -> &'static str {
        "console"
    }

    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("formatter", &self.formatter)
            .field("filter", &self.filter)
            .field("writer", &"<Write>")
            .finish()
    }
}
