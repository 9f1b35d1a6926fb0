//! ispc diagnostics driver.
//!
//! Assembles the per-run [`CompilerOptions`] into a diagnostic session and
//! exposes the subsystem's operations as commands:
//!
//! ```text
//! ispc-diag report error kernel.ispc:3:9-3:14 'Undeclared symbol "widht".'
//! ispc-diag suggest widht width height depth
//! ispc-diag distance kitten sitting
//! ispc-diag split --cwd=/work include/vec.isph
//! ```
//!
//! # Tracing
//!
//! Internal events (suppressed kinds, dropped duplicates, unreadable source
//! files) are logged with `tracing`. Enable them with environment variables:
//! - `RUST_LOG=ispc_diagnostic=trace`: every suppression and dedup decision
//! - `RUST_LOG=debug`: everything at debug level

use std::sync::Once;

pub mod commands;
mod error;
pub mod options;

pub use error::CliError;
pub use options::{parse_position, CompilerOptions};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

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
