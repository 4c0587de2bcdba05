//! Handler Trait
//!
//! 定义了统一的 `Handler` 接口。日志器对每个事件依次调用所有 handler，
//! handler 自己按照激活级别集合决定是否处理该事件。
//!
//! # 使用示例
//!
//! ```rust
//! use slog_avp::sinks::traits::{Handler, HandlerKind};
//! use slog_avp::{LogEvent, Severity};
//!
//! #[derive(Debug)]
//! struct CountingHandler;
//!
//! impl Handler for CountingHandler {
//!     fn handle(&self, event: &LogEvent) -> slog_avp::Result<()> {
//!         println!("custom handler received: {}", event.message);
//!         Ok(())
//!     }
//!
//!     fn is_handling(&self, severity: Severity) -> bool {
//!         severity >= Severity::Warn
//!     }
//!
//!     fn kind(&self) -> HandlerKind {
//!         HandlerKind::Custom
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "counting"
//!     }
//! }
//! ```

use crate::core::event::{LogEvent, Severity};
use crate::error::Result;
use std::fmt::Debug;

/// 基础 Handler trait
///
/// 所有输出目标都必须实现此 trait。实现必须是 `Send + Sync`，
/// 内部可变状态需自行加锁。
pub trait Handler: Send + Sync + Debug {
    /// 输出一条事件
    ///
    /// 返回的错误由日志器汇报给诊断输出，不会传播到日志调用方。
    fn handle(&self, event: &LogEvent) -> Result<()>;

    /// 该级别的事件是否由此 handler 处理
    fn is_handling(&self, severity: Severity) -> bool;

    /// Handler 种类
    fn kind(&self) -> HandlerKind;

    /// 获取 handler 的名称，用于诊断输出
    fn name(&self) -> &'static str;

    /// 刷新缓冲（默认无操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// 获取 handler 的元数据
    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata {
            name: self.name().to_string(),
            kind: self.kind(),
            severities: Severity::ALL
                .into_iter()
                .filter(|severity| self.is_handling(*severity))
                .collect(),
        }
    }
}

/// Handler 种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// 标准输出
    Console,
    /// 按天命名的日志文件
    RollingFile,
    /// SQLite 持久化
    Persistence,
    /// 宿主程序自定义
    Custom,
}

/// Handler 元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMetadata {
    /// Handler 名称
    pub name: String,
    /// Handler 种类
    pub kind: HandlerKind,
    /// 处理的级别，由低到高
    pub severities: Vec<Severity>,
}

/// 激活级别集合
///
/// 保存构建时的级别快照，供各 handler 过滤事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityFilter {
    levels: Vec<Severity>,
}

impl SeverityFilter {
    /// 从级别列表创建过滤器
    pub fn new(levels: Vec<Severity>) -> Self {
        Self { levels }
    }

    /// 放行所有级别
    pub fn all() -> Self {
        Self::new(Severity::ALL.to_vec())
    }

    /// 是否放行该级别
    pub fn allows(&self, severity: Severity) -> bool {
        self.levels.contains(&severity)
    }

    /// 级别列表（保持构建时的顺序）
    pub fn levels(&self) -> &[Severity] {
        &self.levels
    }
}
