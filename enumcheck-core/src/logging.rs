//! Structured logging using **tracing**.
//!
//! The analysis itself is pure and silent; logging covers the machinery
//! around it (document loading, skipped files, run summaries). The JSON
//! subscriber writes machine-readable events to stderr so stdout stays
//! clean for findings output.

use tracing::{error, info, warn};

/// Initializes the global tracing collector (subscriber).
///
/// Call *once* at the beginning of the application's runtime.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=enumcheck=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}
