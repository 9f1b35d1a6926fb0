//! Terminal width detection and message wrapping.

use console::Term;

/// Width assumed when the terminal cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Narrowest width a message is ever wrapped to.
const MIN_WRAP_WIDTH: usize = 40;

/// Columns left free at the right edge.
const RIGHT_MARGIN: usize = 2;

/// Source of the output column width.
///
/// `None` means the width is unknown (output redirected to a file or pipe,
/// no console attached, query failed); [`terminal_width`] turns that into
/// [`DEFAULT_TERMINAL_WIDTH`].
pub trait TerminalInfo {
    fn width(&self) -> Option<usize>;
}

/// Queries the process's standard output handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutTerminal;

impl TerminalInfo for StdoutTerminal {
    fn width(&self) -> Option<usize> {
        let (_rows, columns) = Term::stdout().size_checked()?;
        (columns > 0).then_some(usize::from(columns))
    }
}

/// A fixed width, for tests and `--columns`. Zero counts as unknown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedWidth(pub usize);

impl TerminalInfo for FixedWidth {
    fn width(&self) -> Option<usize> {
        (self.0 > 0).then_some(self.0)
    }
}

/// Column width reported by `terminal`, or the default.
pub fn terminal_width(terminal: &dyn TerminalInfo) -> usize {
    terminal.width().unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Greedily wrap a `prefix: body` message to `column_width`.
///
/// Continuation lines are indented to two columns past the first `:` so they
/// line up under the message text. Words are never split: a word that alone
/// exceeds the width gets a line of its own. Runs of whitespace collapse to
/// one space. The result ends in a single newline and is meant to be written
/// in one call.
///
/// ```
/// use ispc_diagnostic::word_wrap;
///
/// let wrapped = word_wrap("a.ispc:3:1: Error: one two three four five six seven", 40);
/// assert_eq!(wrapped, "a.ispc:3:1: Error: one two three four\n        five six seven\n");
/// ```
pub fn word_wrap(message: &str, column_width: usize) -> String {
    let indent = message
        .find(':')
        .map_or(0, |colon| message[..colon].chars().count() + 2);
    let width = column_width.saturating_sub(RIGHT_MARGIN).max(MIN_WRAP_WIDTH);

    let mut out = String::with_capacity(message.len() + 1);
    let mut column = 0;
    let mut line_has_word = false;

    for word in message.split_whitespace() {
        let len = word.chars().count();

        if line_has_word {
            if column >= indent && column + 1 + len > width {
                out.push('\n');
                out.push_str(&" ".repeat(indent));
                column = indent;
            } else {
                out.push(' ');
                column += 1;
            }
        }

        out.push_str(word);
        column += len;
        line_has_word = true;
    }

    out.push('\n');
    out
}
