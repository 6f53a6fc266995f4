//! Challenge generation, signing, and verification.
//!
//! The signed-challenge form is self-contained: the 64-byte signature is
//! followed by the challenge bytes it covers, so verification needs only the
//! blob and a public key.

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::RngCore as _;

use crate::error::AuthError;
use crate::keys::{CHALLENGE_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN};

// ============================================================================
// Challenge
// ============================================================================

/// Generate a random 32-byte challenge using the OS CSPRNG.
#[must_use]
pub fn generate_challenge() -> [u8; CHALLENGE_LEN] {
    let mut challenge = [0u8; CHALLENGE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut challenge);
    challenge
}

// ============================================================================
// Sign / Verify
// ============================================================================

/// Sign a challenge, producing the self-contained signed-challenge blob.
///
/// The result is the ed25519 signature (64 bytes) followed by the challenge
/// bytes. Ed25519 signing is deterministic, so the same key and challenge
/// always produce the same blob.
#[must_use]
pub fn sign_challenge(challenge: &[u8], key: &SigningKey) -> Vec<u8> {
    let signature = key.sign(challenge);
    let mut blob = Vec::with_capacity(SIGNATURE_LEN + challenge.len());
    blob.extend_from_slice(&signature.to_bytes());
    blob.extend_from_slice(challenge);
    blob
}

/// Verify a signed-challenge blob against a public key.
///
/// The first 64 bytes are the signature; the remainder is the challenge it
/// must cover.
///
/// # Errors
///
/// - [`AuthError::SignatureTooShort`] when the blob cannot contain a
///   signature
/// - [`AuthError::VerificationFailed`] when the signature does not verify;
///   this is the expected-failure outcome, not a fault
pub fn verify_signature(signed: &[u8], key: &VerifyingKey) -> Result<(), AuthError> {
    if signed.len() < SIGNATURE_LEN {
        return Err(AuthError::SignatureTooShort {
            actual: signed.len(),
        });
    }
    let (raw_signature, challenge) = signed.split_at(SIGNATURE_LEN);
    let signature =
        Signature::from_slice(raw_signature).map_err(|_| AuthError::VerificationFailed)?;

    key.verify(challenge, &signature)
        .map_err(|_| AuthError::VerificationFailed)
}

// ============================================================================
// Keypair
// ============================================================================

/// A freshly generated ed25519 key pair.
///
/// The signing key is wiped on drop (`ed25519-dalek`'s zeroize support);
/// `Debug` output never includes private material.
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    /// Generate a new key pair from the OS CSPRNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut seed = [0u8; SEED_LEN];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        Self {
            signing: SigningKey::from_bytes(&seed),
        }
    }

    /// The 32-byte public key.
    #[must_use]
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.signing.verifying_key().to_bytes()
    }

    /// The 32-byte seed (compact private-key form).
    #[must_use]
    pub fn seed(&self) -> [u8; SEED_LEN] {
        self.signing.to_bytes()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
