//! # Verify-Signature Command
//!
//! Implementation of the `wampcheck auth cryptosign verify-signature`
//! command that verifies a signed cryptosign challenge against a public key.
//!
//! ## Outcomes
//!
//! Verification distinguishes three results:
//!
//! - success, printing `Signature verified successfully` (exit 0)
//! - the expected failure `signature verification failed` (exit 1): the
//!   inputs were well-formed but the signature does not verify
//! - validation errors such as a malformed key or a too-short blob (exit 2)

use wampcheck_auth::{verify_signature, verifying_key_from_bytes, AuthError};
use wampcheck_core::{codec, CodecError};

use crate::cli::commands::exit_codes::{EXIT_ERROR, EXIT_VERIFICATION_FAILED};

/// Message printed when verification succeeds.
const VERIFIED_MESSAGE: &str = "Signature verified successfully";

// ============================================================================
// VerifySignatureError
// ============================================================================

/// Errors that can occur when verifying a signed challenge.
#[derive(Debug, thiserror::Error)]
pub enum VerifySignatureError {
    /// The signature argument decoded as neither hex nor base64.
    #[error("invalid signature: {0}")]
    InvalidSignature(CodecError),

    /// The public-key argument decoded as neither hex nor base64.
    #[error("invalid public-key: {0}")]
    InvalidPublicKey(CodecError),

    /// Key validation failed, or the signature did not verify.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl VerifySignatureError {
    /// Returns the appropriate exit code for this error.
    ///
    /// A failed verification is the expected-failure outcome and gets its
    /// own exit code; everything else is a general error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Auth(AuthError::VerificationFailed) => EXIT_VERIFICATION_FAILED,
            _ => EXIT_ERROR,
        }
    }
}

// ============================================================================
// VerifySignatureCommand
// ============================================================================

/// The `auth cryptosign verify-signature` command handler.
///
/// # Example
///
/// ```no_run
/// use wampcheck::cli::commands::auth::VerifySignatureCommand;
///
/// let cmd = VerifySignatureCommand::new("e556...", "d75a...");
/// match cmd.run() {
///     Ok(line) => println!("{line}"),
///     Err(e) => {
///         eprintln!("{e}");
///         std::process::exit(e.exit_code());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct VerifySignatureCommand {
    /// The encoded signed-challenge blob.
    signature: String,
    /// The encoded 32-byte public key.
    public_key: String,
}

impl VerifySignatureCommand {
    /// Create a new `VerifySignatureCommand`.
    #[must_use]
    pub fn new(signature: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            public_key: public_key.into(),
        }
    }

    /// Run the verify command.
    ///
    /// # Errors
    ///
    /// Returns [`VerifySignatureError`] if an argument fails to decode, the
    /// public key is invalid, or the signature does not verify.
    pub fn run(&self) -> Result<String, VerifySignatureError> {
        let signed =
            codec::decode_any(&self.signature).map_err(VerifySignatureError::InvalidSignature)?;

        let key_bytes =
            codec::decode_any(&self.public_key).map_err(VerifySignatureError::InvalidPublicKey)?;
        let verifying_key = verifying_key_from_bytes(&key_bytes)?;

        tracing::debug!(blob_len = signed.len(), "verifying cryptosign signature");

        verify_signature(&signed, &verifying_key)?;
        Ok(VERIFIED_MESSAGE.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
