//! JSON backend.

use wampcheck_messages::Message;

use crate::{SerializeError, Serializer, SerializerId};

/// JSON encoding of the wire array via `serde_json`.
///
/// Output is compact (no whitespace), which is the canonical form for
/// byte-level interop comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn id(&self) -> SerializerId {
        SerializerId::Json
    }

    fn serialize(&self, message: &Message) -> Result<Vec<u8>, SerializeError> {
        Ok(serde_json::to_vec(&message.to_wire())?)
    }
}
