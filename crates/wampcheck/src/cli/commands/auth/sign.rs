//! # Sign-Challenge Command
//!
//! Implementation of the `wampcheck auth cryptosign sign-challenge` command
//! that signs a cryptosign challenge with an ed25519 private key.
//!
//! ## Key Forms
//!
//! The private key argument may be a 32-byte seed or the 64-byte combined
//! form; a seed is expanded before signing, so both forms of the same key
//! produce the same signature. Any other length is rejected with
//! `invalid private-key: must be of length 32 or 64`.
//!
//! ## Output
//!
//! The encoded signed-challenge blob: the 64-byte signature followed by the
//! challenge bytes it covers.

use zeroize::Zeroizing;

use wampcheck_auth::{sign_challenge, signing_key_from_bytes, AuthError};
use wampcheck_core::{codec, CodecError, Encoding};

use crate::cli::commands::exit_codes::EXIT_ERROR;
use crate::logging::redact_sensitive;

// ============================================================================
// SignChallengeError
// ============================================================================

/// Errors that can occur when signing a challenge.
#[derive(Debug, thiserror::Error)]
pub enum SignChallengeError {
    /// The challenge argument decoded as neither hex nor base64.
    #[error("invalid challenge: {0}")]
    InvalidChallenge(CodecError),

    /// The private-key argument decoded as neither hex nor base64.
    #[error("invalid private-key: {0}")]
    InvalidPrivateKey(CodecError),

    /// Key validation or signing failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl SignChallengeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

// ============================================================================
// SignChallengeCommand
// ============================================================================

/// The `auth cryptosign sign-challenge` command handler.
///
/// # Example
///
/// ```no_run
/// use wampcheck::cli::commands::auth::SignChallengeCommand;
/// use wampcheck_core::Encoding;
///
/// let cmd = SignChallengeCommand::new("abc123", "9d61...", Encoding::Hex);
/// match cmd.run() {
///     Ok(blob) => println!("{blob}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Clone)]
pub struct SignChallengeCommand {
    /// The encoded challenge to sign.
    challenge: String,
    /// The encoded private key.
    private_key: String,
    /// The output encoding.
    output: Encoding,
}

impl std::fmt::Debug for SignChallengeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignChallengeCommand")
            .field("challenge", &self.challenge)
            .field("private_key", &"[REDACTED]")
            .field("output", &self.output)
            .finish()
    }
}

impl SignChallengeCommand {
    /// Create a new `SignChallengeCommand`.
    #[must_use]
    pub fn new(
        challenge: impl Into<String>,
        private_key: impl Into<String>,
        output: Encoding,
    ) -> Self {
        Self {
            challenge: challenge.into(),
            private_key: private_key.into(),
            output,
        }
    }

    /// Run the sign command.
    ///
    /// This method:
    /// 1. Decodes the challenge (hex or base64)
    /// 2. Decodes the private key into a zeroized buffer
    /// 3. Validates the key length and expands a seed to the signing key
    /// 4. Signs the challenge
    /// 5. Returns the encoded signed-challenge blob
    ///
    /// # Errors
    ///
    /// Returns [`SignChallengeError`] if either argument fails to decode or
    /// the key has an invalid length or inconsistent halves.
    pub fn run(&self) -> Result<String, SignChallengeError> {
        let challenge =
            codec::decode_any(&self.challenge).map_err(SignChallengeError::InvalidChallenge)?;

        let key_bytes = Zeroizing::new(
            codec::decode_any(&self.private_key).map_err(SignChallengeError::InvalidPrivateKey)?,
        );
        let signing_key = signing_key_from_bytes(&key_bytes)?;

        tracing::debug!(
            challenge_len = challenge.len(),
            private_key = %redact_sensitive(&self.private_key),
            "signing cryptosign challenge"
        );

        let blob = sign_challenge(&challenge, &signing_key);
        Ok(codec::encode(self.output, &blob))
    }
}

// ============================================================================
// Tests
// ============================================================================
