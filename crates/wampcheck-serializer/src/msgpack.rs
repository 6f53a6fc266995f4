//! MessagePack backend.

use wampcheck_messages::Message;

use crate::{SerializeError, Serializer, SerializerId};

/// MessagePack encoding of the wire array via `rmp-serde`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgpackSerializer;

impl Serializer for MsgpackSerializer {
    fn id(&self) -> SerializerId {
        SerializerId::Msgpack
    }

    fn serialize(&self, message: &Message) -> Result<Vec<u8>, SerializeError> {
        Ok(rmp_serde::to_vec(&message.to_wire())?)
    }
}
