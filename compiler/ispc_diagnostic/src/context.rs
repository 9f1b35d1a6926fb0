//! Source line echo with caret underline.
//!
//! After a diagnostic's message, the referenced line(s) are re-read from disk
//! and printed verbatim, followed by a row of `^` under the reported columns:
//!
//! ```text
//!     float y = sqrt(x, 2);
//!               ^^^^
//!
//! ```
//!
//! Column numbers are taken from the first referenced line, so the underline
//! of a multi-line range is only accurate for that line.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use ispc_span::SourcePos;
use tracing::debug;

/// Render the context block for `pos`.
///
/// Returns `None` without touching the filesystem for an unknown position,
/// and `None` when the file cannot be opened or read. Diagnostics never fail
/// because their source file went away.
pub fn render_context(pos: &SourcePos) -> Option<Vec<u8>> {
    if !pos.is_known() {
        return None;
    }

    let file = match File::open(&*pos.file_name) {
        Ok(file) => file,
        Err(e) => {
            debug!(file = %pos.file_name, "skipping source context: {e}");
            return None;
        }
    };

    let mut out = Vec::new();
    if let Err(e) = copy_lines(BufReader::new(file), pos.first_line, pos.last_line, &mut out) {
        debug!(file = %pos.file_name, "skipping source context: {e}");
        return None;
    }
    if !out.is_empty() && !out.ends_with(b"\n") {
        out.push(b'\n');
    }

    underline(pos, &mut out);
    Some(out)
}

/// Write the context block for `pos` to `sink`, if there is one.
pub fn print_context(pos: &SourcePos, sink: &mut impl Write) -> io::Result<()> {
    match render_context(pos) {
        Some(context) => sink.write_all(&context),
        None => Ok(()),
    }
}

/// Copy lines `first..=last` (1-based) of `reader` into `out`, stopping at the
/// end of `last`.
fn copy_lines(reader: impl Read, first: u32, last: u32, out: &mut Vec<u8>) -> io::Result<()> {
    let mut line = 1;
    for byte in reader.bytes() {
        let byte = byte?;
        if line >= first && line <= last {
            out.push(byte);
        }
        if byte == b'\n' {
            line += 1;
            if line > last {
                break;
            }
        }
    }
    Ok(())
}

/// `first_column - 1` spaces, at least one caret, then a blank line.
fn underline(pos: &SourcePos, out: &mut Vec<u8>) {
    let padding = pos.first_column.saturating_sub(1) as usize;
    let carets = pos.last_column.saturating_sub(pos.first_column).max(1) as usize;
    out.resize(out.len() + padding, b' ');
    out.resize(out.len() + carets, b'^');
    out.extend_from_slice(b"\n\n");
}
