//! Error types for cryptosign operations.

/// Errors produced by key decoding, signing, and verification.
///
/// The display strings are part of the harness's observable behavior: other
/// implementations match on them during interop runs, so they are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Private-key bytes are neither a seed nor a combined keypair.
    #[error("invalid private-key: must be of length 32 or 64")]
    InvalidPrivateKeyLength {
        /// The length that was supplied.
        actual: usize,
    },

    /// A 64-byte private key whose public half does not match its seed.
    #[error("invalid private-key: embedded public key does not match the seed")]
    MismatchedKeypair,

    /// Public-key bytes are not exactly 32 bytes.
    #[error("invalid public-key: must be of length 32")]
    InvalidPublicKeyLength {
        /// The length that was supplied.
        actual: usize,
    },

    /// 32 bytes that do not decode to a curve point.
    #[error("invalid public-key: not a valid ed25519 point")]
    MalformedPublicKey,

    /// A signed-challenge blob shorter than one signature.
    #[error("invalid signature: must be at least 64 bytes")]
    SignatureTooShort {
        /// The length that was supplied.
        actual: usize,
    },

    /// The signature is well-formed but does not verify.
    ///
    /// This is an expected outcome of the verify operation, not a fault;
    /// callers report it as the command result.
    #[error("signature verification failed")]
    VerificationFailed,
}
