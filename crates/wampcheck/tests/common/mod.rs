//! Shared test utilities.

use clap::Parser;

use wampcheck::cli::{dispatch, Cli, CommandFailure};

/// Parse an argv vector with the real CLI definitions and run the command.
///
/// Panics if argv does not parse; parse failures are covered by the CLI
/// unit tests.
pub fn run(argv: &[&str]) -> Result<String, CommandFailure> {
    let cli = Cli::try_parse_from(argv).expect("argv should parse");
    dispatch(cli.command, cli.output.into())
}

/// Like [`run`], but asserts success and returns the printed line.
pub fn run_ok(argv: &[&str]) -> String {
    run(argv).expect("command should succeed")
}
