//! Log subscriber setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the executable. `RUST_LOG` overrides the default filter.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::CalcResult;

/// Default filter directive
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("keypad_calculator=debug,info")
        } else {
            EnvFilter::new("keypad_calculator=info")
        }
    })
}

/// Logs compact lines to stderr
pub fn init_stderr_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Logs to a file, leaving the terminal to the TUI
pub fn init_file_logger(path: &Path, verbose: bool) -> CalcResult<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();
    Ok(())
}
