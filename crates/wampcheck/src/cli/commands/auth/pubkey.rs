//! The `auth cryptosign get-pubkey` command.

use zeroize::Zeroizing;

use wampcheck_auth::{public_key_from_private, AuthError};
use wampcheck_core::{codec, CodecError, Encoding};

use crate::cli::commands::exit_codes::EXIT_ERROR;
use crate::logging::redact_sensitive;

/// Errors that can occur when deriving a public key.
#[derive(Debug, thiserror::Error)]
pub enum GetPubkeyError {
    /// The private-key argument decoded as neither hex nor base64.
    #[error("invalid private-key: {0}")]
    InvalidPrivateKey(CodecError),

    /// Key validation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl GetPubkeyError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

/// Derives the ed25519 public key for a private key (seed or combined form)
/// and prints it encoded.
#[derive(Clone)]
pub struct GetPubkeyCommand {
    private_key: String,
    output: Encoding,
}

impl std::fmt::Debug for GetPubkeyCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetPubkeyCommand")
            .field("private_key", &"[REDACTED]")
            .field("output", &self.output)
            .finish()
    }
}

impl GetPubkeyCommand {
    /// Create a new `GetPubkeyCommand`.
    #[must_use]
    pub fn new(private_key: impl Into<String>, output: Encoding) -> Self {
        Self {
            private_key: private_key.into(),
            output,
        }
    }

    /// Run the derivation command, returning the encoded public key.
    ///
    /// # Errors
    ///
    /// Returns [`GetPubkeyError`] if the argument fails to decode or the key
    /// has an invalid length.
    pub fn run(&self) -> Result<String, GetPubkeyError> {
        let key_bytes = Zeroizing::new(
            codec::decode_any(&self.private_key).map_err(GetPubkeyError::InvalidPrivateKey)?,
        );

        tracing::debug!(
            private_key = %redact_sensitive(&self.private_key),
            "deriving cryptosign public key"
        );

        let public = public_key_from_private(&key_bytes)?;
        Ok(codec::encode(self.output, &public))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    const SEED_HEX: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    #[test]
    fn test_seed_derives_known_public_key() {
        let line = GetPubkeyCommand::new(SEED_HEX, Encoding::Hex).run().unwrap();
        assert_eq!(line, PUBLIC_HEX);
    }

    #[test]
    fn test_combined_key_derives_same_public_key() {
        let combined = format!("{SEED_HEX}{PUBLIC_HEX}");
        let line = GetPubkeyCommand::new(combined, Encoding::Hex).run().unwrap();
        assert_eq!(line, PUBLIC_HEX);
    }

    #[test]
    fn test_base64_output() {
        let line = GetPubkeyCommand::new(SEED_HEX, Encoding::Base64)
            .run()
            .unwrap();
        let decoded = codec::decode_any(&line).unwrap();
        assert_eq!(hex::encode(decoded), PUBLIC_HEX);
    }

    #[test]
    fn test_wrong_length_reports_fixed_message() {
        let error = GetPubkeyCommand::new(hex::encode([0u8; 16]), Encoding::Hex)
            .run()
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid private-key: must be of length 32 or 64"
        );
    }

    #[test]
    fn test_undecodable_key_is_rejected() {
        let error = GetPubkeyCommand::new("!!", Encoding::Hex).run().unwrap_err();
        assert!(error.to_string().starts_with("invalid private-key:"));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let cmd = GetPubkeyCommand::new(SEED_HEX, Encoding::Hex);
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains(SEED_HEX));
    }
}
