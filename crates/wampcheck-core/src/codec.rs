//! Hex/base64 rendering of binary results.
//!
//! Every binary artifact the harness produces (serialized message, signature,
//! key material, challenge) is printed through [`encode`] in the encoding the
//! caller selected. The inverse, [`decode_any`], accepts either encoding and
//! disambiguates automatically: hex strings are a strict subset of valid
//! characters with even length, so hex is attempted first and base64 is the
//! fallback.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

// ============================================================================
// Encoding
// ============================================================================

/// Text encoding for binary output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hexadecimal, no separators.
    #[default]
    Hex,

    /// Standard-alphabet base64 with padding.
    Base64,
}

impl Encoding {
    /// Returns the string representation of this encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CodecError
// ============================================================================

/// Error produced when a token decodes as neither hex nor base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The token is not valid hex and not valid base64.
    #[error("not valid hex or base64")]
    UnrecognizedEncoding,
}

// ============================================================================
// Encode / Decode
// ============================================================================

/// Render a byte sequence as text in the selected encoding.
#[must_use]
pub fn encode(encoding: Encoding, bytes: &[u8]) -> String {
    match encoding {
        Encoding::Hex => hex::encode(bytes),
        Encoding::Base64 => BASE64.encode(bytes),
    }
}

/// Decode a token that may be hex or base64.
///
/// Hex is attempted first; a token that is valid under both encodings (even
/// length, only hex digits) is treated as hex. Falls back to standard
/// base64.
///
/// # Errors
///
/// Returns [`CodecError::UnrecognizedEncoding`] if the token decodes under
/// neither encoding.
pub fn decode_any(token: &str) -> Result<Vec<u8>, CodecError> {
    if let Ok(bytes) = hex::decode(token) {
        return Ok(bytes);
    }
    BASE64
        .decode(token)
        .map_err(|_| CodecError::UnrecognizedEncoding)
}

// ============================================================================
// Tests
// ============================================================================
