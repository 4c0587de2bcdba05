//! 进程级模式注册表
//!
//! 保存控制台、数据库以及 Debug/Info/Warn 开关，供 [`crate::build_logger`] 读取。
//! 构建日志器时读取的是一份快照：之后修改开关不会影响已经构建好的日志器。

use crate::config::LoggerConfig;
use crate::core::event::Severity;
use once_cell::sync::Lazy;
use std::sync::RwLock;

/// 全局注册表实例
static GLOBAL_MODES: Lazy<ModeRegistry> = Lazy::new(ModeRegistry::new);

/// 模式注册表
///
/// 每个 setter 只替换一个字段。
#[derive(Debug, Default)]
pub struct ModeRegistry {
    config: RwLock<LoggerConfig>,
}

impl ModeRegistry {
    /// 创建使用默认开关的注册表
    pub fn new() -> Self {
        Self::default()
    }

    fn update(&self, apply: impl FnOnce(&mut LoggerConfig)) {
        // 写入不会 panic，锁中毒时沿用内部数据
        let mut config = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        apply(&mut config);
    }

    pub fn set_console_enabled(&self, value: bool) {
        self.update(|config| config.console_enabled = value);
    }

    pub fn set_persistence_enabled(&self, value: bool) {
        self.update(|config| config.persistence_enabled = value);
    }

    pub fn set_debug_enabled(&self, value: bool) {
        self.update(|config| config.debug_enabled = value);
    }

    pub fn set_info_enabled(&self, value: bool) {
        self.update(|config| config.info_enabled = value);
    }

    pub fn set_warn_enabled(&self, value: bool) {
        self.update(|config| config.warn_enabled = value);
    }

    pub fn set_persistence_path(&self, path: impl Into<String>) {
        let path = path.into();
        self.update(|config| config.persistence_path = path);
    }

    /// 用完整配置替换当前开关
    pub fn apply(&self, config: LoggerConfig) {
        self.update(|current| *current = config);
    }

    /// 恢复默认开关
    pub fn reset(&self) {
        self.apply(LoggerConfig::default());
    }

    /// 当前开关的不可变快照
    pub fn snapshot(&self) -> LoggerConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 当前激活的级别集合
    pub fn active_severities(&self) -> Vec<Severity> {
        self.snapshot().active_severities()
    }
}

/// 获取全局注册表
pub fn global() -> &'static ModeRegistry {
    &GLOBAL_MODES
}

/// 设置是否输出到控制台（默认：开启）
pub fn set_console_enabled(value: bool) {
    global().set_console_enabled(value);
}

/// 设置是否写入 SQLite（默认：关闭）
pub fn set_persistence_enabled(value: bool) {
    global().set_persistence_enabled(value);
}

/// 设置 Debug 级别是否激活（默认：开启）
pub fn set_debug_enabled(value: bool) {
    global().set_debug_enabled(value);
}

/// 设置 Info 级别是否激活（默认：开启）
pub fn set_info_enabled(value: bool) {
    global().set_info_enabled(value);
}

/// 设置 Warn 级别是否激活（默认：开启）
pub fn set_warn_enabled(value: bool) {
    global().set_warn_enabled(value);
}

/// 设置数据库路径；空字符串或不足 4 个字符时使用 `log/logs.db`
pub fn set_persistence_path(path: impl Into<String>) {
    global().set_persistence_path(path);
}

/// 当前激活的级别集合
pub fn active_severities() -> Vec<Severity> {
    global().active_severities()
}
