//! Per-compilation diagnostic settings.

use crate::DiagnosticKind;

/// How a formatted message is laid out on the diagnostic stream.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LayoutMode {
    /// Word-wrap to the terminal width, continuation lines aligned under the
    /// message body.
    Wrap,
    /// Write the message as a single line.
    PassThrough,
}

impl LayoutMode {
    /// `PassThrough` on Windows consoles, `Wrap` everywhere else.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            LayoutMode::PassThrough
        } else {
            LayoutMode::Wrap
        }
    }
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Switches consulted before any formatting work is done.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Drop every [`DiagnosticKind::Warning`].
    pub warnings_disabled: bool,
    /// Print [`DiagnosticKind::Debug`] messages.
    pub debug_printing: bool,
    /// Print [`DiagnosticKind::PerformanceWarning`] messages.
    pub performance_warnings: bool,
    pub layout: LayoutMode,
}

impl DiagnosticConfig {
    #[must_use]
    pub fn with_warnings_disabled(mut self, disabled: bool) -> Self {
        self.warnings_disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_debug_printing(mut self, enabled: bool) -> Self {
        self.debug_printing = enabled;
        self
    }

    #[must_use]
    pub fn with_performance_warnings(mut self, enabled: bool) -> Self {
        self.performance_warnings = enabled;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Whether diagnostics of `kind` are reported at all.
    pub fn allows(&self, kind: DiagnosticKind) -> bool {
        match kind {
            DiagnosticKind::Error => true,
            DiagnosticKind::Warning => !self.warnings_disabled,
            DiagnosticKind::Debug => self.debug_printing,
            DiagnosticKind::PerformanceWarning => self.performance_warnings,
        }
    }
}
