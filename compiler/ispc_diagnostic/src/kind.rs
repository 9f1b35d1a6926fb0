//! Diagnostic kinds.

use std::fmt;

/// The kind of a reported diagnostic.
///
/// Each kind has its own suppression rule in [`DiagnosticConfig`]; only
/// [`DiagnosticKind::Error`] is never suppressed and counted.
///
/// [`DiagnosticConfig`]: crate::DiagnosticConfig
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    Error,
    Warning,
    Debug,
    PerformanceWarning,
}

impl DiagnosticKind {
    /// Label printed between the position prefix and the message body.
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Debug => "Debug",
            DiagnosticKind::PerformanceWarning => "Performance Warning",
        }
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, DiagnosticKind::Error)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
