//! The `distance` command: bounded edit distance between two strings.

use std::io::Write;

use ispc_diagnostic::edit_distance;

use crate::CliError;

/// `distance <a> <b> [max]`
pub fn run_distance(args: &[String], out: &mut impl Write) -> Result<bool, CliError> {
    let (a, b, max) = match args {
        [a, b] => (a, b, 0),
        [a, b, max] => {
            let max = max.parse().map_err(|_| CliError::InvalidNumber {
                what: "distance bound",
                value: max.clone(),
            })?;
            (a, b, max)
        }
        [_] | [] => return Err(CliError::MissingArgument("string to compare")),
        [_, _, _, extra, ..] => return Err(CliError::UnexpectedArgument(extra.clone())),
    };

    writeln!(out, "{}", edit_distance(a, b, max))?;
    Ok(true)
}

#[cfg(test)]
mod tests;
