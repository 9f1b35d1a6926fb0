//! ispc diagnostics CLI

use std::io::{self, Write};
use std::process::ExitCode;

use ispcd::commands::{run_distance, run_report, run_split, run_suggest};
use ispcd::{init_tracing, CliError, CompilerOptions};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, positional) = match CompilerOptions::parse(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let Some((command, rest)) = positional.split_first() else {
        print_usage();
        return ExitCode::from(2);
    };

    match run(command, &options, rest) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, CliError::UnknownCommand(_)) {
                eprintln!("Run 'ispc-diag help' for usage information.");
            }
            ExitCode::from(2)
        }
    }
}

fn run(command: &str, options: &CompilerOptions, args: &[String]) -> Result<bool, CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let success = match command {
        "report" => run_report(options, args)?,
        "suggest" => run_suggest(args, &mut out)?,
        "distance" => run_distance(args, &mut out)?,
        "split" => run_split(options, args, &mut out)?,
        "help" | "-h" => {
            print_usage();
            true
        }
        _ => return Err(CliError::UnknownCommand(command.to_string())),
    };

    out.flush()?;
    Ok(success)
}

fn print_usage() {
    println!("ispc diagnostics driver");
    println!();
    println!("Usage: ispc-diag [options] <command> [args]");
    println!();
    println!("Commands:");
    println!("  report <kind> <pos> <message...> [-- <kind> <pos> <message...>]...");
    println!("                       Emit diagnostics; kind is error, warning, debug or perf,");
    println!("                       pos is file:line:column[-line:column] or -");
    println!("  suggest <query> <candidate...>");
    println!("                       Print the closest candidates to a misspelled name");
    println!("  distance <a> <b> [max]");
    println!("                       Print the edit distance between two strings");
    println!("  split <name>         Split a source file name into directory and base name");
    println!("  help                 Show this help message");
    println!();
    println!("Options:");
    println!("  --woff               Disable warnings");
    println!("  --debug              Print debug messages");
    println!("  --wperf              Print performance warnings");
    println!("  --nowrap             Do not wrap diagnostics to the terminal width");
    println!("  --columns=<n>        Wrap diagnostics to n columns");
    println!("  --cwd=<dir>          Resolve relative file names against dir");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable internal tracing (e.g. RUST_LOG=ispc_diagnostic=trace)");
}
