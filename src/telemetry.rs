//! Tracing initialization.

use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartmarks_config::LoggingConfig;

// Keeps the non-blocking file writer alive for the program duration.
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize tracing with console and optional file output.
///
/// `RUST_LOG` overrides the configured level. Log files are rotated daily
/// under [`LoggingConfig::log_dir`]. Fails if a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let file_layer = if config.file {
        let log_dir = config.log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("smartmarks")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()?;

    Ok(())
}
