//! Diagnostic reporting for the ispc front end.
//!
//! Turns an error or warning condition anchored at a [`SourcePos`] into a
//! message on the diagnostic stream:
//!
//! ```text
//! kernel.ispc:12:9: Error: Undeclared symbol "widht". Did you mean "width"?
//!     return widht * height;
//!            ^^^^^
//! ```
//!
//! - [`DiagnosticSession`] is the single reporting entry point. It applies the
//!   per-kind suppression flags from [`DiagnosticConfig`], drops exact
//!   duplicates, word-wraps to the terminal width and echoes the source line
//!   with a caret underline.
//! - [`suggest`] and [`edit_distance`] produce "did you mean" candidates.
//! - [`fatal`] / [`fatal_error!`] report broken compiler invariants and abort.
//!
//! # Error Guarantees
//!
//! Reporting an error returns [`ErrorGuaranteed`], proof that the user was
//! told about the failure:
//!
//! ```text
//! let guarantee = session.error(&pos, format_args!("Undeclared symbol \"{name}\"."));
//! return Err(guarantee);
//! ```

mod config;
pub mod context;
mod fatal;
mod guarantee;
mod kind;
mod session;
pub mod suggest;
pub mod terminal;

pub use config::{DiagnosticConfig, LayoutMode};
pub use context::{print_context, render_context};
pub use fatal::{fatal, fatal_message};
pub use guarantee::ErrorGuaranteed;
pub use kind::DiagnosticKind;
pub use session::{format_diagnostic, DiagnosticSession, EmitOutcome};
pub use suggest::{did_you_mean, edit_distance, suggest, suggest_within, DEFAULT_MAX_DELTA};
pub use terminal::{
    terminal_width, word_wrap, FixedWidth, StdoutTerminal, TerminalInfo, DEFAULT_TERMINAL_WIDTH,
};

pub use ispc_span::SourcePos;
