//! Protobuf backend.
//!
//! There is no canonical protobuf schema for the protocol's wire array, so
//! this backend defines one: a `WireMessage` holding the array as repeated
//! `WireValue`s, where `WireValue` is a oneof over the value variants. The
//! schema is small enough that the message types are written by hand with
//! prost derives instead of build-script codegen:
//!
//! ```proto
//! message WireValue {
//!   oneof kind {
//!     sint64    integer = 1;
//!     double    float   = 2;
//!     bool      boolean = 3;
//!     bool      null    = 4;
//!     string    text    = 5;
//!     WireList  list    = 6;
//!     WireMap   map     = 7;
//!   }
//! }
//! message WireList { repeated WireValue items = 1; }
//! message WireMap  { map<string, WireValue> entries = 1; }
//! message WireMessage { repeated WireValue fields = 1; }
//! ```

use std::collections::BTreeMap;

use prost::Message as _;

use wampcheck_core::Value;
use wampcheck_messages::Message;

use crate::{SerializeError, Serializer, SerializerId};

/// Protobuf encoding of the wire array via hand-derived `prost` messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufSerializer;

impl Serializer for ProtobufSerializer {
    fn id(&self) -> SerializerId {
        SerializerId::Protobuf
    }

    fn serialize(&self, message: &Message) -> Result<Vec<u8>, SerializeError> {
        let wire = WireMessage {
            fields: message.to_wire().iter().map(WireValue::from).collect(),
        };
        Ok(wire.encode_to_vec())
    }
}

// ============================================================================
// Schema types
// ============================================================================

/// A protocol message: its wire array as repeated values.
#[derive(Clone, PartialEq, prost::Message)]
pub(crate) struct WireMessage {
    /// The wire-array fields in protocol order.
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<WireValue>,
}

/// A single dynamically typed value.
#[derive(Clone, PartialEq, prost::Message)]
pub(crate) struct WireValue {
    /// The populated variant; absent only for a default-constructed value.
    #[prost(oneof = "wire_value::Kind", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub kind: Option<wire_value::Kind>,
}

/// Oneof payload for [`WireValue`].
pub(crate) mod wire_value {
    /// The value variants. Protobuf has no null, so the null variant is a
    /// boolean marker field.
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Kind {
        /// Signed integer, zigzag encoded.
        #[prost(sint64, tag = "1")]
        Integer(i64),
        /// Floating-point number.
        #[prost(double, tag = "2")]
        Float(f64),
        /// Boolean.
        #[prost(bool, tag = "3")]
        Boolean(bool),
        /// Null marker (always `true` when present).
        #[prost(bool, tag = "4")]
        Null(bool),
        /// String.
        #[prost(string, tag = "5")]
        Text(String),
        /// Nested list.
        #[prost(message, tag = "6")]
        List(super::WireList),
        /// Nested map.
        #[prost(message, tag = "7")]
        Map(super::WireMap),
    }
}

/// An ordered sequence of values.
#[derive(Clone, PartialEq, prost::Message)]
pub(crate) struct WireList {
    /// The list items in order.
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<WireValue>,
}

/// A keyed collection of values.
///
/// B-tree backed so the encoded entry order is deterministic.
#[derive(Clone, PartialEq, prost::Message)]
pub(crate) struct WireMap {
    /// The map entries, encoded in sorted key order.
    #[prost(btree_map = "string, message", tag = "1")]
    pub entries: BTreeMap<String, WireValue>,
}

impl From<&Value> for WireValue {
    fn from(value: &Value) -> Self {
        let kind = match value {
            Value::Null => wire_value::Kind::Null(true),
            Value::Bool(flag) => wire_value::Kind::Boolean(*flag),
            Value::Integer(integer) => wire_value::Kind::Integer(*integer),
            Value::Float(float) => wire_value::Kind::Float(*float),
            Value::String(text) => wire_value::Kind::Text(text.clone()),
            Value::List(items) => wire_value::Kind::List(WireList {
                items: items.iter().map(Self::from).collect(),
            }),
            Value::Map(entries) => wire_value::Kind::Map(WireMap {
                entries: entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            }),
        };
        Self { kind: Some(kind) }
    }
}

// ============================================================================
// Tests
// ============================================================================
