//! 按天命名的文件 Handler 实现
//!
//! 回退输出：写入 `<dir>/error-DD-MM-YYYY.log`。事件日期变化时切换到新一天的文件，
//! 除此之外不做任何轮转或清理。

use crate::core::event::{LogEvent, Severity};
use crate::core::formatter::RecordFormatter;
use crate::error::Result;
use crate::sinks::traits::{Handler, HandlerKind, SeverityFilter};
use crate::utils::FileTools;

use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// 日志文件名前缀
pub const FILE_PREFIX: &str = "error";

/// 当前打开的文件
#[derive(Debug)]
struct DailyFile {
    date: NaiveDate,
    path: PathBuf,
    file: File,
}

impl DailyFile {
    fn open(directory: &Path, date: NaiveDate) -> Result<Self> {
        let path = FileTools::daily_file_path(directory, FILE_PREFIX, date);
        let file = FileTools::open_file_append(&path)?;
        Ok(Self { date, path, file })
    }
}

/// 按天命名的文件 Handler
#[derive(Debug)]
pub struct RollingFileHandler {
    directory: PathBuf,
    formatter: RecordFormatter,
    filter: SeverityFilter,
    current: Mutex<DailyFile>,
}

impl RollingFileHandler {
    /// 创建目录并打开今天的日志文件
    ///
    /// 目录创建失败返回 `DirectoryCreation`，文件打开失败返回 `FileOpen`。
    pub fn open<P: AsRef<Path>>(
        directory: P,
        filter: SeverityFilter,
        formatter: RecordFormatter,
    ) -> Result<Self> {
        Self::open_for_date(directory, filter, formatter, Local::now().date_naive())
    }

    fn open_for_date<P: AsRef<Path>>(
        directory: P,
        filter: SeverityFilter,
        formatter: RecordFormatter,
        date: NaiveDate,
    ) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        FileTools::ensure_directory_exists(&directory)?;
        let current = DailyFile::open(&directory, date)?;

        Ok(Self {
            directory,
            formatter,
            filter,
            current: Mutex::new(current),
        })
    }

    /// 当前写入的文件路径
    pub fn current_path(&self) -> PathBuf {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .path
            .clone()
    }

    /// 日志目录
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Handler for RollingFileHandler {
    fn handle(&self, event: &LogEvent) -> Result<()> {
        let line = self.formatter.render(event);
        let date = event.timestamp.date_naive();

        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if current.date != date {
            // 目录可能在运行期间被删除
            FileTools::ensure_directory_exists(&self.directory)?;
            *current = DailyFile::open(&self.directory, date)?;
            debug!("log file rolled over to {}", current.path.display());
        }

        current.file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn is_handling(&self, severity: Severity) -> bool {
        self.filter.allows(severity)
    }

    fn kind(&self) -> HandlerKind {
        HandlerKind::RollingFile
    }

    fn name(&self) -> &'static str {
        "file"
    }

    fn flush(&self) -> Result<()> {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        current.file.flush()?;
        Ok(())
    }
}
