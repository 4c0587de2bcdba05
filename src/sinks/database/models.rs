//! 日志表对应的 Rust 结构体，用于 Diesel 插入与读取。

use crate::core::event::LogEvent;
use crate::sinks::database::schema::logs;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// 用于插入新日志行的结构体
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = logs)]
pub struct NewLogRow<'a> {
    /// 写入时间（本地时间）
    pub timestamp: NaiveDateTime,

    /// 级别名称，如 "ERROR"
    pub level: &'a str,

    pub message: &'a str,

    pub file_name: &'a str,

    pub line_number: i32,

    pub function_name: &'a str,
}

impl<'a> NewLogRow<'a> {
    /// 由事件创建待插入的行，时间戳使用调用方给定的写入时间
    pub fn from_event(event: &'a LogEvent, written_at: NaiveDateTime) -> Self {
        Self {
            timestamp: written_at,
            level: event.severity.as_str(),
            message: &event.message,
            file_name: &event.location.file_name,
            line_number: i32::try_from(event.location.line).unwrap_or(i32::MAX),
            function_name: &event.location.function_name,
        }
    }
}

/// 从数据库读取的完整日志行
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LogRow {
    /// 主键，自增 ID
    pub id: i32,
    pub timestamp: NaiveDateTime,
    pub level: String,
    pub message: String,
    pub file_name: String,
    pub line_number: i32,
    pub function_name: String,
}
