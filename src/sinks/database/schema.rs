//! 日志表结构定义
//!
//! 使用 Diesel 的 table! 宏定义 `logs` 表，并给出建表语句。

diesel::table! {
    logs (id) {
        id -> Integer,
        timestamp -> Timestamp,
        level -> Text,
        message -> Text,
        file_name -> Text,
        line_number -> Integer,
        function_name -> Text,
    }
}

/// 表名
pub const TABLE_NAME: &str = "logs";

/// SQLite 建表语句，可重复执行
pub const SQLITE_CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp DATETIME,
        level VARCHAR(10),
        message TEXT,
        file_name TEXT,
        line_number INTEGER,
        function_name TEXT
    );
"#;
