//! 日志初始化
//!
//! `RUST_LOG` 优先；未设置时按 `verbose` 选择 `info` 或 `debug`。

use tracing_subscriber::EnvFilter;

/// 初始化全局 tracing 订阅者
///
/// 日志写到 stderr，stdout 留给答题界面。
/// 重复调用是安全的，后续调用直接忽略。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
