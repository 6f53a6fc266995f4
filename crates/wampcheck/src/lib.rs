//! # wampcheck
//!
//! Interoperability test harness for WAMP-style protocol implementations.
//!
//! This crate provides both a library interface and the `wampcheck` binary.
//! The library exports the CLI module so tests and other tooling can drive
//! argument parsing and command handlers programmatically.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions and handlers
//! - [`logging`] - Tracing-based logging setup
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use wampcheck::cli::{dispatch, Cli};
//!
//! let cli = Cli::parse();
//! let encoding = cli.output.into();
//! match dispatch(cli.command, encoding) {
//!     Ok(line) => println!("{line}"),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;

// Re-export key logging types for convenience
pub use logging::{
    init_logging, redact_sensitive, verbosity_to_level, LogConfig, LogError, LogFormat, LogLevel,
};
