//! Date-seeded news CLI.
//!
//! This binary delegates to `chrononews::news_cli` for parsing, generation,
//! and rendering, keeping the CLI behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use chrononews::news_cli::{CliError, ParseOutcome, execute, parse_args};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let output = execute(&options)?;
            write_output(&output);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: chrononews (--date <day.month.year> | --random-date) [options]\n",
        "\n",
        "Options:\n",
        "  --date <d.m.yyyy>    Calendar date to generate news for\n",
        "  --random-date        Pick a random valid date instead\n",
        "  --theme <name>       Theme name from the catalogue (defaults to the first)\n",
        "  --themes <path>      Load a theme catalogue JSON file\n",
        "  --json               Emit the report as JSON instead of text cards\n",
        "  --out <path>         Also write the report JSON to a file atomically\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(output: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
        drop(err);
    }
}
