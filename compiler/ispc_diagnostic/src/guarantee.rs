//! Type-level proof that an error was reported.

use std::fmt;

/// Proof that at least one error diagnostic has been reported.
///
/// Only the diagnostic session hands these out, so a function returning
/// `Result<T, ErrorGuaranteed>` cannot fail without telling the user why.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Proof for a non-zero error count, `None` otherwise.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}
