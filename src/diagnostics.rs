//! 日志系统自身的诊断与指标。
//!
//! 写库失败等问题不会传播到日志调用方，而是汇报给可注入的 [`DiagnosticSink`]，
//! 同时计入原子计数器，宿主程序可以通过 [`Diagnostics::snapshot`] 观察 sink 的健康状况。

use crate::error::SlogError;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 诊断输出目标
///
/// 实现者接收来自某个 handler 的失败报告。闭包 `Fn(&str, &SlogError)` 自动实现此 trait。
pub trait DiagnosticSink: Send + Sync {
    /// 汇报一次失败
    fn report(&self, source: &str, error: &SlogError);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str, &SlogError) + Send + Sync,
{
    fn report(&self, source: &str, error: &SlogError) {
        self(source, error)
    }
}

/// 默认诊断输出：写到标准错误，并发出一条 `tracing` 警告
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnosticSink;

impl DiagnosticSink for StderrDiagnosticSink {
    fn report(&self, source: &str, error: &SlogError) {
        eprintln!("slog_avp: {} handler failed: {}", source, error);
        tracing::warn!(handler = source, category = error.category(), "{}", error);
    }
}

/// 内部诊断与指标数据结构。
pub struct Diagnostics {
    /// 已分发的日志事件总数
    events_processed: AtomicU64,

    /// 所有 handler 的失败次数
    sink_errors: AtomicU64,

    /// 写入数据库的行数
    persisted_rows: AtomicU64,

    /// 文件写入次数
    file_writes: AtomicU64,

    /// 控制台写入次数
    console_writes: AtomicU64,

    sink: Arc<dyn DiagnosticSink>,
}

/// 诊断数据的快照，用于外部查询。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagnosticsSnapshot {
    pub events_processed: u64,
    pub sink_errors: u64,
    pub persisted_rows: u64,
    pub file_writes: u64,
    pub console_writes: u64,
}

impl Diagnostics {
    /// 使用默认的标准错误输出创建诊断实例。
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StderrDiagnosticSink))
    }

    /// 使用自定义诊断输出创建诊断实例。
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            events_processed: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
            persisted_rows: AtomicU64::new(0),
            file_writes: AtomicU64::new(0),
            console_writes: AtomicU64::new(0),
            sink,
        }
    }

    /// 汇报 handler 失败，并增加错误计数。
    pub fn report_failure(&self, source: &str, error: &SlogError) {
        self.sink_errors.fetch_add(1, Ordering::Relaxed);
        self.sink.report(source, error);
    }

    pub fn increment_events_processed(&self) {
        self.events_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_persisted_rows(&self) {
        self.persisted_rows.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_file_writes(&self) {
        self.file_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_console_writes(&self) {
        self.console_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取诊断数据的快照。
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            events_processed: self.events_processed.load(Ordering::Relaxed),
            sink_errors: self.sink_errors.load(Ordering::Relaxed),
            persisted_rows: self.persisted_rows.load(Ordering::Relaxed),
            file_writes: self.file_writes.load(Ordering::Relaxed),
            console_writes: self.console_writes.load(Ordering::Relaxed),
        }
    }

    /// 重置所有计数器（主要用于测试）。
    pub fn reset(&self) {
        self.events_processed.store(0, Ordering::Relaxed);
        self.sink_errors.store(0, Ordering::Relaxed);
        self.persisted_rows.store(0, Ordering::Relaxed);
        self.file_writes.store(0, Ordering::Relaxed);
        self.console_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("snapshot", &self.snapshot())
            .field("sink", &"<DiagnosticSink>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;

    #[test]
    fn test_diagnostics_creation() {
        let diagnostics = Diagnostics::new();
        assert_eq!(diagnostics.snapshot(), DiagnosticsSnapshot::default());
    }

    #[test]
    fn test_report_failure_reaches_injected_sink() {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let collected = Arc::clone(&reports);
        let diagnostics = Diagnostics::with_sink(Arc::new(move |source: &str, error: &SlogError| {
            collected
                .lock()
                .unwrap()
                .push(format!("{}: {}", source, error));
        }));

        diagnostics.report_failure("persistence", &SlogError::NotInitialized);

        let reports = reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("persistence: "));
        assert!(reports[0].contains("not initialized"));
        assert_eq!(diagnostics.snapshot().sink_errors, 1);
    }

    #[test]
    fn test_increment_operations() {
        let diagnostics = Diagnostics::new();

        diagnostics.increment_events_processed();
        diagnostics.increment_persisted_rows();
        diagnostics.increment_file_writes();
        diagnostics.increment_console_writes();
        diagnostics.increment_console_writes();

        let snapshot = diagnostics.snapshot();
        assert_eq!(snapshot.events_processed, 1);
        assert_eq!(snapshot.persisted_rows, 1);
        assert_eq!(snapshot.file_writes, 1);
        assert_eq!(snapshot.console_writes, 2);
        assert_eq!(snapshot.sink_errors, 0);
    }

    #[test]
    fn test_reset_functionality() {
        let diagnostics = Diagnostics::with_sink(Arc::new(|_: &str, _: &SlogError| {}));

        diagnostics.increment_events_processed();
        diagnostics.report_failure("file", &SlogError::write("boom"));
        assert_eq!(diagnostics.snapshot().sink_errors, 1);

        diagnostics.reset();
        assert_eq!(diagnostics.snapshot(), DiagnosticsSnapshot::default());
    }

    #[test]
    fn test_concurrent_access() {
        let diagnostics = Arc::new(Diagnostics::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let diagnostics_clone = diagnostics.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    diagnostics_clone.increment_events_processed();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.snapshot().events_processed, 1000);
    }
}
