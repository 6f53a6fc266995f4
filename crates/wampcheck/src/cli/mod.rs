//! # CLI Module
//!
//! Command-line interface for `wampcheck`.
//!
//! ## Module Structure
//!
//! - [`args`] - Argument parsing and CLI structure definitions
//! - [`commands`] - Command handler implementations
//!
//! ## Commands
//!
//! - `wampcheck auth cryptosign generate-challenge` - Random challenge
//! - `wampcheck auth cryptosign sign-challenge <CHALLENGE> <PRIVATE_KEY>` -
//!   Sign a challenge
//! - `wampcheck auth cryptosign verify-signature <SIGNATURE> <PUBLIC_KEY>` -
//!   Verify a signed challenge
//! - `wampcheck auth cryptosign keygen` - Generate an ed25519 key pair
//! - `wampcheck auth cryptosign get-pubkey <PRIVATE_KEY>` - Derive a public
//!   key
//! - `wampcheck message <KIND> [FIELDS...] [--serializer FORMAT]` - Build
//!   and encode a protocol message
//!
//! The global `--output hex|base64` flag selects the encoding of every
//! binary result.

pub mod args;
pub mod commands;

// Re-export main types for convenience
pub use args::{
    AuthCommands, Cli, Commands, CryptosignCommands, MessageCommands, OutputArg, SerializerArg,
};
pub use commands::{dispatch, CommandFailure};
