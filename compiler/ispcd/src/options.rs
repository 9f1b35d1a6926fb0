//! Per-run options and command-line parsing helpers.
//!
//! The compiler's global switches (which diagnostic kinds are shown, how they
//! are laid out, which directory relative file names resolve against) are
//! collected here once and handed to the session and commands that need
//! them.

use std::io;

use ispc_diagnostic::{DiagnosticConfig, DiagnosticSession, FixedWidth, LayoutMode, SourcePos};

use crate::CliError;

/// Options shared by every command.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompilerOptions {
    /// `--woff`: drop all warnings.
    pub warnings_disabled: bool,
    /// `--debug`: show debug messages.
    pub debug_printing: bool,
    /// `--wperf`: show performance warnings.
    pub performance_warnings: bool,
    /// `--nowrap`: write each message on one line.
    pub no_wrap: bool,
    /// `--columns=<n>`: wrap to `n` columns instead of querying the terminal.
    pub columns: Option<usize>,
    /// `--cwd=<dir>`: directory relative file names resolve against.
    pub current_directory: Option<String>,
}

impl CompilerOptions {
    /// Split `args` into options and the remaining positional arguments.
    ///
    /// Options may appear anywhere. A lone `--` is positional (the `report`
    /// command uses it as a separator); any other `--name` must be a known
    /// option.
    pub fn parse(args: &[String]) -> Result<(Self, Vec<String>), CliError> {
        let mut options = CompilerOptions::default();
        let mut rest = Vec::new();

        for arg in args {
            if arg == "--" || !arg.starts_with("--") {
                rest.push(arg.clone());
            } else {
                options.apply_flag(arg)?;
            }
        }

        Ok((options, rest))
    }

    fn apply_flag(&mut self, arg: &str) -> Result<(), CliError> {
        match arg {
            "--woff" => self.warnings_disabled = true,
            "--debug" => self.debug_printing = true,
            "--wperf" => self.performance_warnings = true,
            "--nowrap" => self.no_wrap = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--columns=") {
                    let columns = value.parse().map_err(|_| CliError::InvalidNumber {
                        what: "column count",
                        value: value.to_string(),
                    })?;
                    self.columns = Some(columns);
                } else if let Some(dir) = arg.strip_prefix("--cwd=") {
                    self.current_directory = Some(dir.to_string());
                } else {
                    return Err(CliError::UnknownFlag(arg.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Suppression and layout settings for the diagnostic session.
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        let layout = if self.no_wrap {
            LayoutMode::PassThrough
        } else {
            LayoutMode::platform_default()
        };
        DiagnosticConfig::default()
            .with_warnings_disabled(self.warnings_disabled)
            .with_debug_printing(self.debug_printing)
            .with_performance_warnings(self.performance_warnings)
            .with_layout(layout)
    }

    /// A session reporting to standard error.
    pub fn session(&self) -> DiagnosticSession<io::Stderr> {
        match self.columns {
            Some(columns) => {
                DiagnosticSession::new(io::stderr(), self.diagnostic_config(), FixedWidth(columns))
            }
            None => DiagnosticSession::stderr(self.diagnostic_config()),
        }
    }

    /// `--cwd`, or the process's working directory.
    ///
    /// An unreadable working directory yields an empty string, which makes
    /// relative names fail to resolve rather than resolve somewhere wrong.
    pub fn current_directory(&self) -> String {
        if let Some(dir) = &self.current_directory {
            return dir.clone();
        }
        match std::env::current_dir() {
            Ok(dir) => dir.to_string_lossy().into_owned(),
            Err(e) => {
                tracing::warn!("cannot read working directory: {e}");
                String::new()
            }
        }
    }
}

/// Parse `file:line:column[-line:column]`, or `-` for no position.
///
/// A single `line:column` covers one column. File names may contain `:`
/// and `-`; only the trailing numeric fields are split off.
pub fn parse_position(spec: &str) -> Result<SourcePos, CliError> {
    if spec == "-" {
        return Ok(SourcePos::unknown());
    }
    let invalid = || CliError::InvalidPosition(spec.to_string());

    let (start, end) = match spec.rsplit_once('-') {
        Some((start, end)) => match parse_line_column(end) {
            Some(end) => (start, Some(end)),
            None => (spec, None),
        },
        None => (spec, None),
    };
    let (file, line, column) = split_file_line_column(start).ok_or_else(invalid)?;

    let pos = match end {
        Some((last_line, last_column)) => SourcePos::new(file, line, column, last_line, last_column),
        None => SourcePos::point(file, line, column),
    };
    if pos.is_known() && pos.is_valid() {
        Ok(pos)
    } else {
        Err(invalid())
    }
}

/// Split `file:line:column`, taking the numbers from the right.
fn split_file_line_column(spec: &str) -> Option<(&str, u32, u32)> {
    let (rest, column) = spec.rsplit_once(':')?;
    let (file, line) = rest.rsplit_once(':')?;
    if file.is_empty() {
        return None;
    }
    Some((file, line.parse().ok()?, column.parse().ok()?))
}

fn parse_line_column(spec: &str) -> Option<(u32, u32)> {
    let (line, column) = spec.split_once(':')?;
    Some((line.parse().ok()?, column.parse().ok()?))
}
