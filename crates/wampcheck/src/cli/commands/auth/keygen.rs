//! The `auth cryptosign keygen` command.

use wampcheck_auth::Keypair;
use wampcheck_core::{codec, Encoding};

/// Generates a fresh ed25519 key pair and prints both halves, labeled and
/// newline-separated.
#[derive(Debug, Clone, Copy)]
pub struct KeygenCommand {
    output: Encoding,
}

impl KeygenCommand {
    /// Create a new `KeygenCommand`.
    #[must_use]
    pub const fn new(output: Encoding) -> Self {
        Self { output }
    }

    /// Run the command, returning the labeled key pair.
    ///
    /// The private key is printed in its 32-byte seed form.
    #[must_use]
    pub fn run(&self) -> String {
        let keypair = Keypair::generate();
        let public = codec::encode(self.output, &keypair.public_key());
        let private = codec::encode(self.output, &keypair.seed());
        tracing::debug!(encoding = %self.output, "generated cryptosign keypair");
        format!("Public Key: {public}\nPrivate Key: {private}")
    }
}
