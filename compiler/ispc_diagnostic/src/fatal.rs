//! Reporting of broken compiler invariants.
//!
//! These are not user diagnostics: they bypass the session (no suppression,
//! no dedup, no wrapping) and end the process.

use std::io::{self, Write};

/// The line written by [`fatal`].
pub fn fatal_message(file: &str, line: u32, message: &str) -> String {
    format!("{file}({line}): FATAL ERROR: {message}")
}

/// Print `file(line): FATAL ERROR: message` to standard error and abort.
///
/// Prefer the [`fatal_error!`](crate::fatal_error) macro, which fills in the
/// caller's location.
#[cold]
pub fn fatal(file: &str, line: u32, message: &str) -> ! {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", fatal_message(file, line, message));
    let _ = stderr.flush();
    std::process::abort()
}

/// Abort with a fatal error at the current source location.
///
/// ```no_run
/// use ispc_diagnostic::fatal_error;
///
/// let symbols: Vec<&str> = Vec::new();
/// if symbols.is_empty() {
///     fatal_error!("symbol table not initialized");
/// }
/// ```
#[macro_export]
macro_rules! fatal_error {
    ($($arg:tt)*) => {
        $crate::fatal(file!(), line!(), &format!($($arg)*))
    };
}
