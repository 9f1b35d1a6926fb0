//! The `suggest` command: "did you mean" candidates for a name.

use std::io::Write;

use ispc_diagnostic::{did_you_mean, suggest};

use crate::CliError;

/// `suggest <query> <candidate...>`
///
/// Prints the closest tier of candidates, one per line, followed by the
/// sentence a diagnostic would append. Fails when nothing is close enough.
pub fn run_suggest(args: &[String], out: &mut impl Write) -> Result<bool, CliError> {
    let Some((query, candidates)) = args.split_first() else {
        return Err(CliError::MissingArgument("query"));
    };

    let tier = suggest(query, candidates.iter().map(String::as_str));
    for name in &tier {
        writeln!(out, "{name}")?;
    }
    if let Some(sentence) = did_you_mean(&tier) {
        writeln!(out, "{sentence}")?;
    }
    Ok(!tier.is_empty())
}
