//! Logging setup.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `verbose` maps 0/1/2+ to info/debug/trace for this crate, overridden
/// entirely by `RUST_LOG` when set. When `log_to_file` is on, a daily
/// rolling file under `log_dir` is written alongside stdout; the
/// returned guard must be held for the process lifetime or buffered
/// lines are lost.
pub fn init(verbose: u8, log_to_file: bool, log_dir: &Path) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("corvid_wallet={level},warn"))
        });

    if log_to_file {
        std::fs::create_dir_all(log_dir)?;
        let appender = tracing_appender::rolling::daily(log_dir, "corvid-wallet.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        info!("logging to {}", log_dir.display());
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stdout),
            )
            .init();
        Ok(None)
    }
}
