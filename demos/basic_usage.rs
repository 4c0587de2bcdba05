//! slog_avp 基本使用示例
//!
//! 关闭控制台后日志写入 `log/error-DD-MM-YYYY.log`。

use slog_avp::{build_application, mode, slog_debug, slog_error, slog_info, Application};

fn setup_application() -> Application {
    // 开关必须在构建日志器之前设置
    mode::set_console_enabled(false);
    mode::set_debug_enabled(true);
    mode::set_info_enabled(true);
    mode::set_warn_enabled(true);

    build_application()
}

fn load_settings(app: &Application) {
    slog_debug!(app.log, "loading settings");
    slog_error!(app.log, "settings file not found, using defaults");
}

fn main() {
    println!("正在初始化 slog_avp...");
    let app = setup_application();

    slog_info!(app.log, "application started");
    load_settings(&app);

    app.log.flush();
    println!(
        "完成，共分发 {} 条日志",
        app.log.diagnostics().snapshot().events_processed
    );
}
