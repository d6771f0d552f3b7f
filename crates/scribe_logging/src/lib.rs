#![deny(missing_docs)]
//! Shared logging utilities for the scribe workspace.
//!
//! Library crates only emit through the `scribe_*` macros below; choosing a
//! backend is left to the binary. Tests can call [`initialize_for_tests`].

/// Log target used by every `scribe_*` macro, so the CLI can filter on it.
pub const TARGET: &str = "scribe";

/// Logs a trace-level message under the scribe target.
#[macro_export]
macro_rules! scribe_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the scribe target.
#[macro_export]
macro_rules! scribe_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the scribe target.
#[macro_export]
macro_rules! scribe_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the scribe target.
#[macro_export]
macro_rules! scribe_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the scribe target.
#[macro_export]
macro_rules! scribe_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Initializes a terminal logger for integration tests.
///
/// Safe to call from every test: only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
