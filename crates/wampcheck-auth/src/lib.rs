//! # wampcheck-auth
//!
//! Cryptosign primitives for the `wampcheck` interoperability harness.
//!
//! Cryptosign is a challenge/response authentication scheme built on ed25519
//! signatures over an opaque challenge. This crate provides the five
//! operations the harness exposes:
//!
//! - [`generate_challenge`] - random 32-byte challenge
//! - [`sign_challenge`] - sign a challenge, producing the self-contained
//!   signed-challenge blob (signature followed by the challenge bytes)
//! - [`verify_signature`] - verify a signed-challenge blob
//! - [`Keypair::generate`] - fresh ed25519 key pair
//! - [`public_key_from_private`] - derive the public key from private-key
//!   bytes
//!
//! ## Key Forms
//!
//! An ed25519 private key arrives either as a 32-byte seed or as the 64-byte
//! combined form (seed followed by the derived public key). Any 32-byte key
//! is expanded before signing; a 64-byte key is validated against its
//! embedded public half. Every other length is an error.
//!
//! ```
//! use wampcheck_auth::{signing_key_from_bytes, sign_challenge, AuthError};
//!
//! let seed = [0x9d; 32];
//! let key = signing_key_from_bytes(&seed).unwrap();
//! let blob = sign_challenge(b"abc", &key);
//! assert_eq!(blob.len(), 64 + 3);
//!
//! assert!(matches!(
//!     signing_key_from_bytes(&[0u8; 16]),
//!     Err(AuthError::InvalidPrivateKeyLength { .. })
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cryptosign;
pub mod error;
pub mod keys;

pub use cryptosign::{generate_challenge, sign_challenge, verify_signature, Keypair};
pub use error::AuthError;
pub use keys::{
    public_key_from_private, signing_key_from_bytes, verifying_key_from_bytes, CHALLENGE_LEN,
    KEYPAIR_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN,
};
