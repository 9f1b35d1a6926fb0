//! Line/column source positions.

use std::fmt;
use std::sync::Arc;

/// A range of source text in a named file.
///
/// Lines and columns are 1-based. `last_column` is one past the final
/// highlighted column, so a single-character token at column 5 is
/// `first_column = 5, last_column = 6`.
///
/// `first_line == 0` is the sentinel for "no position available"; use
/// [`SourcePos::unknown`] to build it and [`SourcePos::is_known`] to test for
/// it. Never treat it as line zero.
///
/// The file name is reference counted so positions can be copied through
/// diagnostic calls by value without reallocating the name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourcePos {
    pub file_name: Arc<str>,
    pub first_line: u32,
    pub first_column: u32,
    pub last_line: u32,
    pub last_column: u32,
}

impl SourcePos {
    /// Create a position covering `first_line:first_column` up to
    /// `last_line:last_column`.
    pub fn new(
        file_name: impl Into<Arc<str>>,
        first_line: u32,
        first_column: u32,
        last_line: u32,
        last_column: u32,
    ) -> Self {
        SourcePos {
            file_name: file_name.into(),
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }

    /// Create a position covering a single column.
    pub fn point(file_name: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self::new(file_name, line, column, line, column.saturating_add(1))
    }

    /// The "no position available" sentinel.
    pub fn unknown() -> Self {
        Self::new("", 0, 0, 0, 0)
    }

    /// Whether this position refers to actual source text.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.first_line != 0
    }

    /// Whether the range invariants hold.
    ///
    /// The sentinel is always valid. A known position needs a non-empty file
    /// name, 1-based columns, `last_line >= first_line`, and on a single line
    /// `last_column >= first_column`.
    pub fn is_valid(&self) -> bool {
        if !self.is_known() {
            return true;
        }
        if self.file_name.is_empty() || self.first_column == 0 {
            return false;
        }
        if self.last_line < self.first_line {
            return false;
        }
        self.is_multi_line() || self.last_column >= self.first_column
    }

    /// Whether the range spans more than one line.
    #[inline]
    pub fn is_multi_line(&self) -> bool {
        self.last_line > self.first_line
    }

    /// Widen this position to also cover `other`.
    ///
    /// Positions in different files cannot be joined; `self` is returned
    /// unchanged in that case. An unknown side yields the other side.
    #[must_use]
    pub fn join(&self, other: &SourcePos) -> SourcePos {
        if !other.is_known() || (self.is_known() && self.file_name != other.file_name) {
            return self.clone();
        }
        if !self.is_known() {
            return other.clone();
        }

        let (first_line, first_column) =
            (self.first_line, self.first_column).min((other.first_line, other.first_column));
        let (last_line, last_column) =
            (self.last_line, self.last_column).max((other.last_line, other.last_column));

        SourcePos {
            file_name: Arc::clone(&self.file_name),
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Renders the `file:line:column` diagnostic prefix.
impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(
                f,
                "{}:{}:{}",
                self.file_name, self.first_line, self.first_column
            )
        } else {
            write!(f, "<unknown>")
        }
    }
}
