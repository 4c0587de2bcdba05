//! tracing 桥接层
//!
//! [`LoggerLayer`] 把宿主程序里 `tracing::info!` 等宏产生的事件转交给 [`Logger`]。
//! 本 crate 自身发出的事件会被跳过，避免 handler 内部的日志再次进入 handler。

use crate::core::event::{Severity, SourceLocation};
use crate::core::logger::Logger;

use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

const OWN_TARGET: &str = "slog_avp";

/// tracing 桥接层
#[derive(Debug, Clone)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

fn is_own_target(target: &str) -> bool {
    target == OWN_TARGET
        || target
            .strip_prefix(OWN_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// 收集 `message` 字段，其余字段以 ` key=value` 追加在消息后
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let severity = Severity::from(*metadata.level());
        if !self.logger.is_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let mut message = visitor.message;
        message.push_str(&visitor.fields);

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => {
                SourceLocation::new(file, line, metadata.module_path().unwrap_or_default())
            }
            _ => SourceLocation::unknown(),
        };

        self.logger.log(severity, message, location);
    }
}
