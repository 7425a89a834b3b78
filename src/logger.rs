use tracing::metadata::LevelFilter;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants::{LOGS_DIR, LOG_FILE_PREFIX};

/// Colored stdout at INFO (overridable via `RUST_LOG`) plus a daily rolling DEBUG file.
///
/// The returned guard must be held until exit or buffered file lines are lost.
pub fn init_default_logger() -> WorkerGuard {
    let file_appender = rolling::daily(LOGS_DIR, LOG_FILE_PREFIX);
    let (file_writer, guard) = NonBlocking::new(file_appender);

    let stdout_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let file_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .with_target(false)
        .with_filter(stdout_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(file_writer)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
