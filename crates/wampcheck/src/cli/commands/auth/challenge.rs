//! The `auth cryptosign generate-challenge` command.

use wampcheck_auth::generate_challenge;
use wampcheck_core::{codec, Encoding};

/// Generates a random 32-byte challenge and prints it encoded.
#[derive(Debug, Clone, Copy)]
pub struct GenerateChallengeCommand {
    output: Encoding,
}

impl GenerateChallengeCommand {
    /// Create a new `GenerateChallengeCommand`.
    #[must_use]
    pub const fn new(output: Encoding) -> Self {
        Self { output }
    }

    /// Run the command, returning the encoded challenge.
    #[must_use]
    pub fn run(&self) -> String {
        let challenge = generate_challenge();
        tracing::debug!(encoding = %self.output, "generated cryptosign challenge");
        codec::encode(self.output, &challenge)
    }
}
