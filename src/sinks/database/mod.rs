//! SQLite 持久化模块
//!
//! 此模块提供了把日志逐行追加到单文件 SQLite 数据库 `logs` 表的功能。

pub mod handler;
pub mod models;
pub mod schema;
pub mod sink;

pub use handler::PersistenceHandler;
pub use models::{LogRow, NewLogRow};
pub use schema::{logs, SQLITE_CREATE_TABLE, TABLE_NAME};
pub use sink::{resolve_store_path, PersistenceSink, DB_EXTENSIONS};
