//! 调用点宏
//!
//! `slog_info!(logger, "user {} logged in", id)` 等宏在调用点捕获文件名、行号
//! 和所在函数，再交给 [`crate::Logger`]。

/// 所在函数的完整路径
#[doc(hidden)]
#[macro_export]
macro_rules! __slog_function_path {
    () => {{
        fn __slog_here() {}
        fn __slog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __slog_type_name_of(__slog_here);
        name.strip_suffix("::__slog_here").unwrap_or(name)
    }};
}

/// 当前调用点的 [`SourceLocation`](crate::SourceLocation)
#[macro_export]
macro_rules! slog_location {
    () => {
        $crate::SourceLocation::new(file!(), line!(), $crate::__slog_function_path!())
    };
}

/// 以指定级别记录一条消息
#[macro_export]
macro_rules! slog_log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format!($($arg)+), $crate::slog_location!())
    };
}

#[macro_export]
macro_rules! slog_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::slog_log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! slog_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::slog_log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! slog_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::slog_log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! slog_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::slog_log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// 记录 Fatal 消息；不会终止进程
#[macro_export]
macro_rules! slog_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::slog_log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
