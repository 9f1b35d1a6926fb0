//! Diagnostic session: the reporting entry point for one compilation.
//!
//! Features:
//! - Per-kind suppression from [`DiagnosticConfig`]
//! - Exact-text deduplication for the lifetime of the session
//! - Word wrapping to the terminal width
//! - Source line echo with caret underline
//! - Error counting with [`ErrorGuaranteed`] proof
//!
//! The session is shared by reference between compiler phases and worker
//! threads. Dedup check, counter update and the write of the complete
//! diagnostic happen under one lock, so concurrent reports never interleave
//! on the sink.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use ispc_span::SourcePos;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tracing::{trace, warn};

use crate::terminal::{terminal_width, word_wrap, StdoutTerminal, TerminalInfo};
use crate::{render_context, DiagnosticConfig, DiagnosticKind, ErrorGuaranteed, LayoutMode};

/// What happened to a reported diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EmitOutcome {
    /// Written to the sink.
    Printed,
    /// The exact same text was already printed by this session.
    Duplicate,
    /// The kind is turned off by the session's config.
    Suppressed,
}

/// Build the full text of a diagnostic, without wrapping or newline.
///
/// `file:line:column: Kind: message` for a known position,
/// `Kind: message` otherwise.
pub fn format_diagnostic(kind: DiagnosticKind, pos: &SourcePos, message: &dyn fmt::Display) -> String {
    let mut text = String::new();
    let written = if pos.is_known() {
        write!(text, "{pos}: {kind}: {message}")
    } else {
        write!(text, "{kind}: {message}")
    };
    if written.is_err() {
        crate::fatal_error!("formatting a {kind} diagnostic failed");
    }
    text
}

/// Mutable session state, guarded as one unit.
struct SessionState<W> {
    /// Every message text printed so far.
    printed: FxHashSet<String>,
    /// Error-kind reports seen, duplicates included.
    error_count: usize,
    sink: W,
}

/// Reporting context for one compilation.
///
/// # Example
///
/// ```
/// use ispc_diagnostic::{DiagnosticConfig, DiagnosticSession, FixedWidth, SourcePos};
///
/// let session = DiagnosticSession::new(Vec::new(), DiagnosticConfig::default(), FixedWidth(80));
/// let pos = SourcePos::unknown();
/// session.error(&pos, format_args!("Unable to find include file \"{}\".", "vec.isph"));
/// session.error(&pos, format_args!("Unable to find include file \"{}\".", "vec.isph"));
///
/// assert_eq!(session.error_count(), 2);
/// let output = String::from_utf8(session.into_writer()).unwrap();
/// assert_eq!(output, "Error: Unable to find include file \"vec.isph\".\n");
/// ```
pub struct DiagnosticSession<W: Write> {
    config: DiagnosticConfig,
    terminal: Box<dyn TerminalInfo + Send + Sync>,
    state: Mutex<SessionState<W>>,
}

impl DiagnosticSession<io::Stderr> {
    /// Session reporting to standard error, wrapped to the width of standard
    /// output.
    pub fn stderr(config: DiagnosticConfig) -> Self {
        Self::new(io::stderr(), config, StdoutTerminal)
    }
}

impl<W: Write> DiagnosticSession<W> {
    /// Create a session writing to `sink`.
    pub fn new(
        sink: W,
        config: DiagnosticConfig,
        terminal: impl TerminalInfo + Send + Sync + 'static,
    ) -> Self {
        DiagnosticSession {
            config,
            terminal: Box::new(terminal),
            state: Mutex::new(SessionState {
                printed: FxHashSet::default(),
                error_count: 0,
                sink,
            }),
        }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Report an error. Errors are never suppressed.
    pub fn error(&self, pos: &SourcePos, message: impl fmt::Display) -> ErrorGuaranteed {
        self.emit(DiagnosticKind::Error, pos, message);
        ErrorGuaranteed::new()
    }

    /// Report a warning unless warnings are disabled.
    pub fn warning(&self, pos: &SourcePos, message: impl fmt::Display) -> EmitOutcome {
        self.emit(DiagnosticKind::Warning, pos, message)
    }

    /// Report a debug message if debug printing is enabled.
    pub fn debug(&self, pos: &SourcePos, message: impl fmt::Display) -> EmitOutcome {
        self.emit(DiagnosticKind::Debug, pos, message)
    }

    /// Report a performance warning if those are enabled.
    pub fn performance_warning(&self, pos: &SourcePos, message: impl fmt::Display) -> EmitOutcome {
        self.emit(DiagnosticKind::PerformanceWarning, pos, message)
    }

    /// Report a diagnostic of any kind.
    ///
    /// Every Error-kind call increments the error count, including ones whose
    /// text was already printed: the count tracks errors found, not lines
    /// shown.
    pub fn emit(&self, kind: DiagnosticKind, pos: &SourcePos, message: impl fmt::Display) -> EmitOutcome {
        if !self.config.allows(kind) {
            trace!(%kind, "diagnostic suppressed by config");
            return EmitOutcome::Suppressed;
        }

        let text = format_diagnostic(kind, pos, &message);

        let mut state = self.state.lock();
        if kind.is_error() {
            state.error_count += 1;
        }
        if state.printed.contains(&text) {
            trace!(%kind, "duplicate diagnostic dropped");
            return EmitOutcome::Duplicate;
        }

        let mut out = match self.config.layout {
            LayoutMode::Wrap => word_wrap(&text, terminal_width(&*self.terminal)),
            LayoutMode::PassThrough => format!("{text}\n"),
        }
        .into_bytes();
        if let Some(context) = render_context(pos) {
            out.extend_from_slice(&context);
        }
        state.printed.insert(text);

        if let Err(e) = state.sink.write_all(&out).and_then(|()| state.sink.flush()) {
            warn!("failed to write diagnostic: {e}");
        }
        EmitOutcome::Printed
    }

    /// Error-kind reports so far, duplicates included.
    pub fn error_count(&self) -> usize {
        self.state.lock().error_count
    }

    /// Proof of a reported error, if there was one.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count())
    }

    /// Distinct messages written to the sink so far.
    pub fn printed_count(&self) -> usize {
        self.state.lock().printed.len()
    }

    /// End the session and take back the sink.
    pub fn into_writer(self) -> W {
        self.state.into_inner().sink
    }
}

impl<W: Write> fmt::Debug for DiagnosticSession<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("DiagnosticSession")
            .field("config", &self.config)
            .field("error_count", &state.error_count)
            .field("printed", &state.printed.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
