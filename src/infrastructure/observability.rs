//! Logging setup shared by the binaries.
//!
//! Filtering follows `RUST_LOG`, always admitting `info`. The Lambda entry
//! points log without ANSI colors or timestamps since CloudWatch adds its own.

use tracing::Level;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output for local development.
    Pretty,
    /// Single-line output for the Lambda runtime.
    Compact,
}

pub fn init_tracing(format: LogFormat) {
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
        }
        LogFormat::Compact => {
            let stdout_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .compact();
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
        }
    }
}
