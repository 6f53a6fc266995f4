//! Ed25519 key decoding and derivation.
//!
//! Private keys are accepted in two forms: the 32-byte seed and the 64-byte
//! combined form (seed followed by the derived public key). Signing always
//! happens with the expanded key, so a seed is expanded here and a combined
//! key is validated against its embedded public half.

use ed25519_dalek::{SigningKey, VerifyingKey};

use crate::error::AuthError;

/// Length of an ed25519 seed (compact private-key form).
pub const SEED_LEN: usize = 32;

/// Length of the combined private-key form (seed plus public key).
pub const KEYPAIR_LEN: usize = 64;

/// Length of an ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Length of a generated challenge.
pub const CHALLENGE_LEN: usize = 32;

/// Decode private-key bytes into a signing key.
///
/// A 32-byte input is treated as a seed and expanded; a 64-byte input is
/// treated as the combined form and its public half is checked against the
/// seed.
///
/// # Errors
///
/// - [`AuthError::InvalidPrivateKeyLength`] for any other length
/// - [`AuthError::MismatchedKeypair`] when a combined key is inconsistent
pub fn signing_key_from_bytes(bytes: &[u8]) -> Result<SigningKey, AuthError> {
    match bytes.len() {
        SEED_LEN => {
            let mut seed = [0u8; SEED_LEN];
            seed.copy_from_slice(bytes);
            Ok(SigningKey::from_bytes(&seed))
        }
        KEYPAIR_LEN => {
            let mut keypair = [0u8; KEYPAIR_LEN];
            keypair.copy_from_slice(bytes);
            SigningKey::from_keypair_bytes(&keypair).map_err(|_| AuthError::MismatchedKeypair)
        }
        actual => Err(AuthError::InvalidPrivateKeyLength { actual }),
    }
}

/// Decode public-key bytes into a verifying key.
///
/// # Errors
///
/// - [`AuthError::InvalidPublicKeyLength`] when not exactly 32 bytes
/// - [`AuthError::MalformedPublicKey`] when the bytes are not a curve point
pub fn verifying_key_from_bytes(bytes: &[u8]) -> Result<VerifyingKey, AuthError> {
    let raw: &[u8; PUBLIC_KEY_LEN] = bytes
        .try_into()
        .map_err(|_| AuthError::InvalidPublicKeyLength {
            actual: bytes.len(),
        })?;
    VerifyingKey::from_bytes(raw).map_err(|_| AuthError::MalformedPublicKey)
}

/// Derive the public key from private-key bytes (seed or combined form).
///
/// # Errors
///
/// Same as [`signing_key_from_bytes`].
pub fn public_key_from_private(bytes: &[u8]) -> Result<[u8; PUBLIC_KEY_LEN], AuthError> {
    let signing_key = signing_key_from_bytes(bytes)?;
    Ok(signing_key.verifying_key().to_bytes())
}
