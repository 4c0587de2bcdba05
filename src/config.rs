//! 定义 slog_avp 的配置结构体。
//!
//! `LoggerConfig` 是一次构建日志器时使用的不可变快照。它可以直接构造、
//! 从 TOML 加载，或者由全局模式注册表（[`crate::mode`]）生成。

use crate::core::event::Severity;
use crate::error::{Result, SlogError};
use serde::Deserialize;
use std::path::PathBuf;

// --- 辅助函数，用于提供配置项的默认值 ---
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

/// 默认日志目录（相对于进程工作目录）
pub const DEFAULT_LOG_DIR: &str = "log";

/// 默认数据库路径
pub const DEFAULT_STORE_PATH: &str = "log/logs.db";

/// 日志器配置快照。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// 输出到控制台
    #[serde(default = "default_true")]
    pub console_enabled: bool,
    /// 写入 SQLite
    #[serde(default = "default_false")]
    pub persistence_enabled: bool,
    #[serde(default = "default_true")]
    pub debug_enabled: bool,
    #[serde(default = "default_true")]
    pub info_enabled: bool,
    #[serde(default = "default_true")]
    pub warn_enabled: bool,
    /// 数据库路径，空字符串表示使用默认路径
    #[serde(default)]
    pub persistence_path: String,
    /// 回退日志文件所在目录
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// 控制台级别标签着色
    #[serde(default = "default_false")]
    pub color_enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console_enabled: default_true(),
            persistence_enabled: default_false(),
            debug_enabled: default_true(),
            info_enabled: default_true(),
            warn_enabled: default_true(),
            persistence_path: String::new(),
            log_dir: default_log_dir(),
            color_enabled: default_false(),
        }
    }
}

impl LoggerConfig {
    /// 当前激活的级别集合
    ///
    /// 顺序固定为 `Error, Fatal`，随后依次是启用的 `Warn`、`Info`、`Debug`。
    pub fn active_severities(&self) -> Vec<Severity> {
        let mut levels = vec![Severity::Error, Severity::Fatal];

        if self.warn_enabled {
            levels.push(Severity::Warn);
        }
        if self.info_enabled {
            levels.push(Severity::Info);
        }
        if self.debug_enabled {
            levels.push(Severity::Debug);
        }

        levels
    }

    /// 该级别是否激活
    pub fn is_active(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error | Severity::Fatal => true,
            Severity::Warn => self.warn_enabled,
            Severity::Info => self.info_enabled,
            Severity::Debug => self.debug_enabled,
        }
    }
}

/// 用于从 TOML 文件加载 `LoggerConfig` 的辅助函数。
pub fn load_config_from_file(path: &std::path::Path) -> Result<LoggerConfig> {
    use std::fs;

    if !path.exists() {
        return Err(SlogError::ConfigFileMissing(
            path.to_string_lossy().into_owned(),
        ));
    }

    let config_str = fs::read_to_string(path)?;
    load_config_from_str(&config_str)
}

/// 用于从 TOML 字符串加载 `LoggerConfig` 的辅助函数。
pub fn load_config_from_str(config_str: &str) -> Result<LoggerConfig> {
    let config: LoggerConfig = toml::from_str(config_str)?;
    validate_config(&config)?;
    Ok(config)
}

/// 验证配置的有效性。
pub fn validate_config(config: &LoggerConfig) -> Result<()> {
    if config.log_dir.as_os_str().is_empty() {
        return Err(SlogError::config("log_dir must not be empty"));
    }

    if config.persistence_path.contains('\0') {
        return Err(SlogError::config(
            "persistence_path must not contain NUL bytes",
        ));
    }

    Ok(())
}
