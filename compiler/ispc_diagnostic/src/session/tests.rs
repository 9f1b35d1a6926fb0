use super::*;
use crate::FixedWidth;
use pretty_assertions::assert_eq;
use rayon::prelude::*;
use tempfile::NamedTempFile;

fn session(config: DiagnosticConfig) -> DiagnosticSession<Vec<u8>> {
    DiagnosticSession::new(Vec::new(), config.with_layout(LayoutMode::Wrap), FixedWidth(80))
}

fn output(session: DiagnosticSession<Vec<u8>>) -> String {
    String::from_utf8(session.into_writer()).unwrap()
}

#[test]
fn test_format_without_position() {
    let text = format_diagnostic(
        DiagnosticKind::Warning,
        &SourcePos::unknown(),
        &"Ignoring unknown pragma.",
    );
    assert_eq!(text, "Warning: Ignoring unknown pragma.");
}

#[test]
fn test_format_with_position() {
    let pos = SourcePos::new("kernel.ispc", 12, 9, 12, 14);
    let text = format_diagnostic(
        DiagnosticKind::PerformanceWarning,
        &pos,
        &format_args!("Gather required to load value of type \"{}\".", "varying float"),
    );
    assert_eq!(
        text,
        "kernel.ispc:12:9: Performance Warning: Gather required to load value of type \"varying float\"."
    );
}

#[test]
fn test_error_printed_once_counted_twice() {
    let session = session(DiagnosticConfig::default());
    let pos = SourcePos::point("missing.ispc", 3, 4);

    session.error(&pos, "Undeclared symbol \"x\".");
    session.error(&pos, "Undeclared symbol \"x\".");

    assert_eq!(session.error_count(), 2);
    assert_eq!(session.printed_count(), 1);
    assert_eq!(
        output(session),
        "missing.ispc:3:4: Error: Undeclared symbol \"x\".\n"
    );
}

#[test]
fn test_emit_outcomes() {
    let session = session(DiagnosticConfig::default());
    let pos = SourcePos::unknown();
    assert_eq!(session.warning(&pos, "w"), EmitOutcome::Printed);
    assert_eq!(session.warning(&pos, "w"), EmitOutcome::Duplicate);
    assert_eq!(session.debug(&pos, "d"), EmitOutcome::Suppressed);
    assert_eq!(
        session.emit(DiagnosticKind::Error, &pos, "e"),
        EmitOutcome::Printed
    );
    assert_eq!(
        session.emit(DiagnosticKind::Error, &pos, "e"),
        EmitOutcome::Duplicate
    );
}

#[test]
fn test_same_text_at_different_positions_printed_twice() {
    let session = session(DiagnosticConfig::default());
    session.error(&SourcePos::point("a.ispc", 1, 1), "Bad cast.");
    session.error(&SourcePos::point("a.ispc", 2, 1), "Bad cast.");

    assert_eq!(session.printed_count(), 2);
    assert_eq!(
        output(session),
        "a.ispc:1:1: Error: Bad cast.\na.ispc:2:1: Error: Bad cast.\n"
    );
}

#[test]
fn test_same_body_different_kind_not_duplicate() {
    let config = DiagnosticConfig::default().with_debug_printing(true);
    let session = session(config);
    let pos = SourcePos::unknown();
    session.warning(&pos, "loop unrolled");
    session.debug(&pos, "loop unrolled");
    assert_eq!(output(session), "Warning: loop unrolled\nDebug: loop unrolled\n");
}

#[test]
fn test_warnings_disabled() {
    let session = session(DiagnosticConfig::default().with_warnings_disabled(true));
    let pos = SourcePos::unknown();
    assert_eq!(session.warning(&pos, "unused"), EmitOutcome::Suppressed);
    assert_eq!(session.printed_count(), 0);
    assert_eq!(session.error_count(), 0);
    assert_eq!(output(session), "");
}

#[test]
fn test_debug_and_perf_off_by_default() {
    let session = session(DiagnosticConfig::default());
    let pos = SourcePos::unknown();
    assert_eq!(session.debug(&pos, "d"), EmitOutcome::Suppressed);
    assert_eq!(
        session.performance_warning(&pos, "p"),
        EmitOutcome::Suppressed
    );
    assert_eq!(output(session), "");
}

#[test]
fn test_debug_and_perf_enabled() {
    let config = DiagnosticConfig::default()
        .with_debug_printing(true)
        .with_performance_warnings(true);
    let session = session(config);
    let pos = SourcePos::unknown();
    session.debug(&pos, "d");
    session.performance_warning(&pos, "p");
    assert_eq!(output(session), "Debug: d\nPerformance Warning: p\n");
}

#[test]
fn test_errors_never_suppressed() {
    let config = DiagnosticConfig::default().with_warnings_disabled(true);
    let session = session(config);
    session.error(&SourcePos::unknown(), "still reported");
    assert!(session.has_errors().is_some());
    assert_eq!(output(session), "Error: still reported\n");
}

#[test]
fn test_has_errors_ignores_other_kinds() {
    let session = session(DiagnosticConfig::default());
    session.warning(&SourcePos::unknown(), "just a warning");
    assert_eq!(session.has_errors(), None);
}

#[test]
fn test_long_message_is_wrapped() {
    let session = DiagnosticSession::new(
        Vec::new(),
        DiagnosticConfig::default().with_layout(LayoutMode::Wrap),
        FixedWidth(50),
    );
    session.error(
        &SourcePos::point("f.ispc", 1, 1),
        "Can't convert between types \"uniform int32\" and \"varying float\" for assignment.",
    );
    assert_eq!(
        output(session),
        "f.ispc:1:1: Error: Can't convert between types\n        \"uniform int32\" and \"varying float\" for\n        assignment.\n"
    );
}

#[test]
fn test_pass_through_layout_does_not_wrap() {
    let session = DiagnosticSession::new(
        Vec::new(),
        DiagnosticConfig::default().with_layout(LayoutMode::PassThrough),
        FixedWidth(40),
    );
    let body = "word ".repeat(30);
    session.warning(&SourcePos::unknown(), body.trim_end());
    assert_eq!(output(session), format!("Warning: {}\n", body.trim_end()));
}

#[test]
fn test_message_followed_by_source_context() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"uniform int a = 1;\nvarying float b = a / zero;\n")
        .unwrap();
    file.flush().unwrap();
    let path = file.path().to_str().unwrap();

    let session = DiagnosticSession::new(
        Vec::new(),
        DiagnosticConfig::default().with_layout(LayoutMode::Wrap),
        FixedWidth(1000),
    );
    let pos = SourcePos::new(path, 2, 23, 2, 27);
    session.error(&pos, format_args!("Undeclared symbol \"{}\".", "zero"));
    // The duplicate must not echo the context again either.
    session.error(&pos, format_args!("Undeclared symbol \"{}\".", "zero"));

    assert_eq!(
        output(session),
        format!(
            "{path}:2:23: Error: Undeclared symbol \"zero\".\n\
             varying float b = a / zero;\n\
             \x20                     ^^^^\n\
             \n"
        )
    );
}

#[test]
fn test_concurrent_reports_do_not_interleave() {
    let session = session(DiagnosticConfig::default());
    let pos = SourcePos::point("shared.ispc", 10, 2);

    (0..64).into_par_iter().for_each(|i| {
        session.error(&pos, "Assignment to const-qualified variable.");
        session.warning(&pos, format_args!("Unused result {}.", i % 4));
    });

    assert_eq!(session.error_count(), 64);
    assert_eq!(session.printed_count(), 5);

    let text = output(session);
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec![
            "shared.ispc:10:2: Error: Assignment to const-qualified variable.",
            "shared.ispc:10:2: Warning: Unused result 0.",
            "shared.ispc:10:2: Warning: Unused result 1.",
            "shared.ispc:10:2: Warning: Unused result 2.",
            "shared.ispc:10:2: Warning: Unused result 3.",
        ]
    );
}

#[test]
fn test_failing_sink_is_soft() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let session = DiagnosticSession::new(Broken, DiagnosticConfig::default(), FixedWidth(80));
    assert_eq!(
        session.emit(DiagnosticKind::Error, &SourcePos::unknown(), "lost"),
        EmitOutcome::Printed
    );
    assert_eq!(session.error_count(), 1);
}

#[test]
fn test_debug_format_shows_counts() {
    let session = session(DiagnosticConfig::default());
    session.error(&SourcePos::unknown(), "e");
    let debug = format!("{session:?}");
    assert!(debug.contains("error_count: 1"));
    assert!(debug.contains("printed: 1"));
}
