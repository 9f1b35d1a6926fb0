//! The `report` command: emit diagnostics through a session.

use std::io::Write;

use ispc_diagnostic::{DiagnosticKind, DiagnosticSession, ErrorGuaranteed, SourcePos};

use crate::{parse_position, CliError, CompilerOptions};

/// One diagnostic requested on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub kind: DiagnosticKind,
    pub pos: SourcePos,
    pub message: String,
}

fn parse_kind(name: &str) -> Result<DiagnosticKind, CliError> {
    match name {
        "error" => Ok(DiagnosticKind::Error),
        "warning" => Ok(DiagnosticKind::Warning),
        "debug" => Ok(DiagnosticKind::Debug),
        "perf" | "performance-warning" => Ok(DiagnosticKind::PerformanceWarning),
        _ => Err(CliError::UnknownKind(name.to_string())),
    }
}

/// Parse `<kind> <pos> <message...>` groups separated by `--`.
///
/// Message words are joined with single spaces. Empty groups are skipped.
pub fn parse_reports(args: &[String]) -> Result<Vec<Report>, CliError> {
    let mut reports = Vec::new();

    for group in args.split(|arg| arg == "--").filter(|group| !group.is_empty()) {
        let [kind, pos, message @ ..] = group else {
            return Err(CliError::MissingArgument("source position"));
        };
        if message.is_empty() {
            return Err(CliError::MissingArgument("message"));
        }
        reports.push(Report {
            kind: parse_kind(kind)?,
            pos: parse_position(pos)?,
            message: message.join(" "),
        });
    }

    if reports.is_empty() {
        return Err(CliError::MissingArgument("diagnostic kind"));
    }
    Ok(reports)
}

/// Send every report through `session`, in order.
pub fn emit_reports<W: Write>(
    session: &DiagnosticSession<W>,
    reports: &[Report],
) -> Option<ErrorGuaranteed> {
    for report in reports {
        session.emit(report.kind, &report.pos, &report.message);
    }
    session.has_errors()
}

/// `report <kind> <pos> <message...> [-- <kind> <pos> <message...>]...`
///
/// Fails when any error was reported.
pub fn run_report(options: &CompilerOptions, args: &[String]) -> Result<bool, CliError> {
    let reports = parse_reports(args)?;
    let session = options.session();
    let errors = emit_reports(&session, &reports);
    tracing::debug!(
        reported = reports.len(),
        printed = session.printed_count(),
        errors = session.error_count(),
        "report finished"
    );
    Ok(errors.is_none())
}
