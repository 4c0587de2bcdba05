//!
//! SQLite 持久化 Sink 实现
//!
//! 延迟打开单文件 SQLite 数据库，确保 `logs` 表存在，每次调用同步追加一行。
//! 连接由互斥锁保护，同一时刻只有一个写入者。

use crate::config::DEFAULT_STORE_PATH;
use crate::core::event::LogEvent;
use crate::error::{Result, SlogError};
use crate::sinks::database::models::NewLogRow;
use crate::sinks::database::schema::{logs, SQLITE_CREATE_TABLE};
use crate::utils::FileTools;

use chrono::Local;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// 视为数据库文件的扩展名
pub const DB_EXTENSIONS: [&str; 3] = [".db", ".sqlite", ".sqlite3"];

/// 解析数据库路径
///
/// 不足 4 个字符（含空字符串）时使用 `log/logs.db`；
/// 没有数据库扩展名时追加 `.db`。
pub fn resolve_store_path(raw: &str) -> PathBuf {
    let path = if raw.len() > 3 { raw } else { DEFAULT_STORE_PATH };

    if FileTools::has_extension(path, &DB_EXTENSIONS) {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{}.db", path))
    }
}

/// SQLite 持久化 Sink
pub struct PersistenceSink {
    /// 解析后的数据库路径
    path: PathBuf,
    /// 数据库连接，未打开时为 None
    connection: Mutex<Option<SqliteConnection>>,
}

impl std::fmt::Debug for PersistenceSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceSink")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .field("connection", &"<SqliteConnection>")
            .finish()
    }
}

impl PersistenceSink {
    /// 创建未打开的 Sink，路径按 [`resolve_store_path`] 解析
    pub fn new(raw_path: &str) -> Self {
        Self {
            path: resolve_store_path(raw_path),
            connection: Mutex::new(None),
        }
    }

    /// 创建并立即打开
    pub fn open_at(raw_path: &str) -> Result<Self> {
        let sink = Self::new(raw_path);
        sink.open()?;
        Ok(sink)
    }

    fn lock(&self) -> MutexGuard<'_, Option<SqliteConnection>> {
        self.connection
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 打开数据库并确保表结构存在
    ///
    /// 已经打开时直接返回成功。
    pub fn open(&self) -> Result<()> {
        let mut guard = self.lock();
        if guard.is_some() {
            return Ok(());
        }

        FileTools::ensure_parent_exists(&self.path)?;

        let url = self.path.to_string_lossy();
        let mut conn = SqliteConnection::establish(&url).map_err(|e| SlogError::StoreOpen {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        // 读一次文件头，损坏的文件在这里失败
        conn.batch_execute("PRAGMA schema_version;")
            .map_err(|e| SlogError::StoreOpen {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        conn.batch_execute(SQLITE_CREATE_TABLE)
            .map_err(|e| SlogError::schema(e.to_string()))?;

        *guard = Some(conn);
        drop(guard);

        info!("log store opened at {}", self.path.display());
        Ok(())
    }

    /// 追加一行日志
    ///
    /// 未打开时返回 `NotInitialized`，写入失败返回 `Write`。
    /// 每次调用是一条独立的同步语句，不重试、不批量。
    pub fn append(&self, event: &LogEvent) -> Result<()> {
        let mut guard = self.lock();
        let conn = guard.as_mut().ok_or(SlogError::NotInitialized)?;

        let row = NewLogRow::from_event(event, Local::now().naive_local());
        diesel::insert_into(logs::table)
            .values(&row)
            .execute(conn)
            .map_err(|e| SlogError::write(e.to_string()))?;

        Ok(())
    }

    /// 关闭连接；之后的追加返回 `NotInitialized`
    pub fn close(&self) {
        if self.lock().take().is_some() {
            debug!("log store at {} closed", self.path.display());
        }
    }

    /// 是否已打开
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// 解析后的数据库路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}
