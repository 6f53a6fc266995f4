//! # `wampcheck`
//!
//! Interoperability test harness for WAMP-style protocol implementations.
//!
//! ## Usage
//!
//! ```bash
//! # Build a CALL message, JSON-serialized, hex-encoded
//! wampcheck message call 1 my.proc arg1 42 --serializer=json --output=hex
//!
//! # Generate a cryptosign challenge
//! wampcheck auth cryptosign generate-challenge
//!
//! # Sign a challenge with a 32-byte seed
//! wampcheck auth cryptosign sign-challenge <CHALLENGE> <PRIVATE_KEY>
//!
//! # Verify a signed challenge
//! wampcheck auth cryptosign verify-signature <SIGNATURE> <PUBLIC_KEY>
//!
//! # Generate an ed25519 key pair
//! wampcheck auth cryptosign keygen
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use clap::Parser;

use wampcheck::cli::commands::exit_codes::EXIT_ERROR;
use wampcheck::cli::{dispatch, Cli};
use wampcheck::logging::{init_logging, verbosity_to_level, LogConfig, LogError, LogFormat};

/// Set up logging based on verbosity level.
///
/// # Errors
///
/// Returns [`LogError`] if logging initialization fails.
fn setup_logging(verbose: u8) -> Result<(), LogError> {
    let config = LogConfig {
        level: verbosity_to_level(verbose),
        format: LogFormat::Pretty,
    };
    init_logging(&config)
}

/// Main entry point for the `wampcheck` binary.
///
/// On success exactly one result is printed to stdout and the process exits
/// zero; on failure the error message goes to stderr and the process exits
/// with the command's mapped non-zero code.
fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(EXIT_ERROR);
    }

    match dispatch(cli.command, cli.output.into()) {
        Ok(line) => println!("{line}"),
        Err(failure) => {
            eprintln!("{failure}");
            std::process::exit(failure.exit_code);
        }
    }
}
