//! Command handlers for the `ispc-diag` CLI.
//!
//! Each handler takes the positional arguments after the command name and
//! returns `Ok(true)` on success, `Ok(false)` when the command ran but the
//! outcome is a failure (errors were reported, nothing matched), or a
//! [`CliError`](crate::CliError) for a malformed command line.

mod distance;
mod report;
mod split;
mod suggest;

pub use distance::run_distance;
pub use report::{emit_reports, parse_reports, run_report, Report};
pub use split::run_split;
pub use suggest::run_suggest;
