//! Logging 日志模块
//!
//! 提供 NavRisk 的默认 Tracing 日志初始化器。日志级别由 `RUST_LOG` 环境变量控制，
//! 未设置时默认为 `INFO`。

use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 初始化默认的非 JSON 日志。
///
/// # Panics
///
/// 如果全局默认 subscriber 已被设置，此函数会 panic。
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init()
}

/// 初始化 JSON 格式日志，适用于日志采集系统。
///
/// # Panics
///
/// 如果全局默认 subscriber 已被设置，此函数会 panic。
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true),
        )
        .init()
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
