//! Lispyc - command-line front end for Lispy.
//!
//! Wires the parser and evaluator to a terminal: argument parsing, the
//! interactive loop with history, file evaluation, and diagnostics.

use std::sync::Once;

pub mod cli;
pub mod config;
mod error;
pub mod print_handler;
pub mod repl;

pub use cli::Cli;
pub use config::ReplConfig;
pub use error::ReplError;
pub use print_handler::PrintHandler;
pub use repl::{process_line, run_file, run_repl, LineOutcome};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lispy_eval=debug` or `RUST_LOG=trace`; logs go to
/// stderr so results on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
