//! Log output setup.

use log::SetLoggerError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Why logging could not be set up.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Another `tracing` subscriber is already installed.
    #[error("a tracing subscriber is already installed")]
    Subscriber(#[from] SetGlobalDefaultError),
    /// Another `log` logger is already installed.
    #[error("a log logger is already installed")]
    Logger(#[from] SetLoggerError),
}

/// Installs a formatting subscriber and routes `log` records into it.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> Result<(), LoggerError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Library crates log through the `log` facade
    LogTracer::init()?;
    Ok(())
}
