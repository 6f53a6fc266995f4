//! # wampcheck-serializer
//!
//! Wire-format serializer backends for the `wampcheck` interoperability
//! harness.
//!
//! Every backend serializes the same input, the message's canonical wire
//! array ([`Message::to_wire`]), so two implementations of the protocol can
//! compare encoded bytes for any supported format.
//!
//! ## Supported Formats
//!
//! - [`JsonSerializer`] - JSON via `serde_json`
//! - [`CborSerializer`] - CBOR via `ciborium`
//! - [`MsgpackSerializer`] - MessagePack via `rmp-serde`
//! - [`ProtobufSerializer`] - Protobuf via hand-derived `prost` messages
//!
//! ## Selection
//!
//! The CLI enumerates valid serializer names, so an unrecognized name is
//! rejected at argument parsing. [`serializer_for`] is a pure lookup with no
//! fallback:
//!
//! ```
//! use wampcheck_serializer::{serializer_for, SerializerId};
//! use wampcheck_messages::Message;
//!
//! let serializer = serializer_for(SerializerId::Json);
//! let message = Message::new_unregistered(1);
//! let bytes = serializer.serialize(&message).unwrap();
//! assert_eq!(bytes, b"[67,1]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cbor;
mod json;
mod msgpack;
mod protobuf;

pub use cbor::CborSerializer;
pub use json::JsonSerializer;
pub use msgpack::MsgpackSerializer;
pub use protobuf::ProtobufSerializer;

use std::fmt;

use wampcheck_messages::Message;

// ============================================================================
// SerializerId
// ============================================================================

/// Identifier of a supported wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SerializerId {
    /// JSON text encoding.
    #[default]
    Json,
    /// CBOR binary encoding.
    Cbor,
    /// MessagePack binary encoding.
    Msgpack,
    /// Protobuf binary encoding.
    Protobuf,
}

impl SerializerId {
    /// Returns the CLI name of this serializer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Cbor => "cbor",
            Self::Msgpack => "msgpack",
            Self::Protobuf => "protobuf",
        }
    }
}

impl fmt::Display for SerializerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Serializer trait
// ============================================================================

/// A wire-format encoder for protocol messages.
///
/// Implementations are stateless; serialization of the same message is
/// deterministic for every backend (argument maps iterate in sorted key
/// order).
pub trait Serializer: Send + Sync {
    /// The identifier of this backend.
    fn id(&self) -> SerializerId;

    /// Encode a message into this backend's wire format.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`] if the backend rejects the value tree.
    fn serialize(&self, message: &Message) -> Result<Vec<u8>, SerializeError>;
}

/// Resolve a serializer identifier to its backend.
///
/// Pure lookup; unknown names never reach this point because the CLI
/// enumerates the valid identifiers.
#[must_use]
pub fn serializer_for(id: SerializerId) -> &'static dyn Serializer {
    match id {
        SerializerId::Json => &JsonSerializer,
        SerializerId::Cbor => &CborSerializer,
        SerializerId::Msgpack => &MsgpackSerializer,
        SerializerId::Protobuf => &ProtobufSerializer,
    }
}

// ============================================================================
// SerializeError
// ============================================================================

/// Errors produced by the serializer backends.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// JSON encoding failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR encoding failed.
    #[error("CBOR serialization failed: {0}")]
    Cbor(#[from] ciborium::ser::Error<std::io::Error>),

    /// MessagePack encoding failed.
    #[error("MessagePack serialization failed: {0}")]
    Msgpack(#[from] rmp_serde::encode::Error),
}

// ============================================================================
// Tests
// ============================================================================
