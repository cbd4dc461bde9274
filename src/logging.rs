//! Logging initialization
//!
//! Log output goes to a rolling file instead of the terminal so trace lines
//! never interleave with the interactive console.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Directory where log files are written
const LOG_DIR: &str = "logs";

/// File name prefix for the daily-rolling log
const LOG_PREFIX: &str = "permsync.log";

/// Initialize the tracing subscriber
///
/// Returns a guard that must stay alive for the life of the process;
/// dropping it flushes buffered log lines. The `RUST_LOG` environment
/// variable overrides the default `info` filter.
pub fn init_logging() -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(LOG_DIR, LOG_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}
