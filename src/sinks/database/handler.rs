//! 持久化 Handler
//!
//! 把 [`PersistenceSink`] 包装成 [`Handler`]。写库错误原样返回，
//! 由日志器汇报给诊断输出，不会到达日志调用方。

use super::sink::PersistenceSink;
use crate::core::event::{LogEvent, Severity};
use crate::error::Result;
use crate::sinks::traits::{Handler, HandlerKind, SeverityFilter};
use std::sync::Arc;

/// 持久化 Handler
#[derive(Debug, Clone)]
pub struct PersistenceHandler {
    sink: Arc<PersistenceSink>,
    filter: SeverityFilter,
}

impl PersistenceHandler {
    /// 使用已打开（或稍后打开）的 sink 创建 handler
    pub fn new(sink: Arc<PersistenceSink>, filter: SeverityFilter) -> Self {
        Self { sink, filter }
    }

    /// 底层 sink
    pub fn sink(&self) -> &Arc<PersistenceSink> {
        &self.sink
    }
}

impl Handler for PersistenceHandler {
    fn handle(&self, event: &LogEvent) -> Result<()> {
        self.sink.append(event)
    }

    fn is_handling(&self, severity: Severity) -> bool {
        self.filter.allows(severity)
    }

    fn kind(&self) -> HandlerKind {
        HandlerKind::Persistence
    }

    fn name(&self) -> &'static str {
        "persistence"
    }
}
