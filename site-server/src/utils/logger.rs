//! 日志初始化
//!
//! 开发环境输出到终端；生产环境 (`ENVIRONMENT=production`) 额外写入
//! 工作目录下按天滚动的日志文件。

use std::path::Path;

/// Initialize the logger (terminal only)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger, optionally writing to a daily-rolling file
///
/// `log_dir` 必须已存在（main 先建好工作目录再初始化日志）。
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "site-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
