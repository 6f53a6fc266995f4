//! # Cryptosign CLI Commands
//!
//! Implementation of the `wampcheck auth cryptosign` command set: challenge
//! generation, challenge signing, signature verification, key-pair
//! generation, and public-key derivation.
//!
//! Every operation is a single request/response with no state; key material
//! arrives encoded (hex or base64) on the command line, is decoded into
//! zeroized buffers, used once, and dropped.

pub mod challenge;
pub mod keygen;
pub mod pubkey;
pub mod sign;
pub mod verify;

pub use challenge::GenerateChallengeCommand;
pub use keygen::KeygenCommand;
pub use pubkey::{GetPubkeyCommand, GetPubkeyError};
pub use sign::{SignChallengeCommand, SignChallengeError};
pub use verify::{VerifySignatureCommand, VerifySignatureError};
