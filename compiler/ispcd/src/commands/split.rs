//! The `split` command: resolve a source file name.

use std::io::Write;

use ispc_diagnostic::fatal_error;
use ispc_span::split_path;

use crate::{CliError, CompilerOptions};

/// `split <name>`
///
/// Prints the directory and the base file name on separate lines. A name
/// that cannot be split is an inconsistent file model and aborts.
pub fn run_split(
    options: &CompilerOptions,
    args: &[String],
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let name = match args {
        [name] => name,
        [] => return Err(CliError::MissingArgument("file name")),
        [_, extra, ..] => return Err(CliError::UnexpectedArgument(extra.clone())),
    };

    let current_directory = options.current_directory();
    let split = match split_path(&current_directory, name) {
        Ok(split) => split,
        Err(e) => fatal_error!("cannot resolve source file `{name}`: {e}"),
    };

    writeln!(out, "{}", split.directory)?;
    writeln!(out, "{}", split.file_name)?;
    Ok(true)
}
