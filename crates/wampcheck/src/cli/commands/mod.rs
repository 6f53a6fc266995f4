//! # Command Handlers
//!
//! One handler per CLI operation. Every handler follows the same contract:
//! it either returns the single output line to print, or an error whose
//! display string is the message to report before exiting with the mapped
//! exit code. Nothing partial is ever printed.

pub mod auth;
pub mod exit_codes;
pub mod message;

use wampcheck_core::Encoding;

use crate::cli::args::{AuthCommands, Commands, CryptosignCommands};

use self::auth::{
    GenerateChallengeCommand, GetPubkeyCommand, KeygenCommand, SignChallengeCommand,
    VerifySignatureCommand,
};
use self::message::MessageCommand;

// ============================================================================
// CommandFailure
// ============================================================================

/// A failed command: the message to report and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// Message printed to stderr.
    pub message: String,
    /// Process exit code (always non-zero).
    pub exit_code: i32,
}

impl CommandFailure {
    fn new(exit_code: i32, error: &impl std::fmt::Display) -> Self {
        Self {
            message: error.to_string(),
            exit_code,
        }
    }
}

impl std::fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Route a parsed command to its handler.
///
/// # Errors
///
/// Returns [`CommandFailure`] carrying the handler's error message and exit
/// code.
pub fn dispatch(command: Commands, encoding: Encoding) -> Result<String, CommandFailure> {
    match command {
        Commands::Auth {
            command: AuthCommands::Cryptosign { command },
        } => dispatch_cryptosign(command, encoding),

        Commands::Message {
            serializer,
            command,
        } => MessageCommand::new(command, serializer.into(), encoding)
            .run()
            .map_err(|e| CommandFailure::new(e.exit_code(), &e)),
    }
}

fn dispatch_cryptosign(
    command: CryptosignCommands,
    encoding: Encoding,
) -> Result<String, CommandFailure> {
    match command {
        CryptosignCommands::GenerateChallenge => Ok(GenerateChallengeCommand::new(encoding).run()),

        CryptosignCommands::SignChallenge(args) => {
            SignChallengeCommand::new(args.challenge, args.private_key, encoding)
                .run()
                .map_err(|e| CommandFailure::new(e.exit_code(), &e))
        }

        CryptosignCommands::VerifySignature(args) => {
            VerifySignatureCommand::new(args.signature, args.public_key)
                .run()
                .map_err(|e| CommandFailure::new(e.exit_code(), &e))
        }

        CryptosignCommands::Keygen => Ok(KeygenCommand::new(encoding).run()),

        CryptosignCommands::GetPubkey(args) => GetPubkeyCommand::new(args.private_key, encoding)
            .run()
            .map_err(|e| CommandFailure::new(e.exit_code(), &e)),
    }
}
