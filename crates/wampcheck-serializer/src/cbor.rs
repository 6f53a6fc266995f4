//! CBOR backend.

use wampcheck_messages::Message;

use crate::{SerializeError, Serializer, SerializerId};

/// CBOR encoding of the wire array via `ciborium`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CborSerializer;

impl Serializer for CborSerializer {
    fn id(&self) -> SerializerId {
        SerializerId::Cbor
    }

    fn serialize(&self, message: &Message) -> Result<Vec<u8>, SerializeError> {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&message.to_wire(), &mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use ciborium::Value as CborValue;
    use wampcheck_core::{Dict, Value};

    fn decode(bytes: &[u8]) -> CborValue {
        ciborium::de::from_reader(bytes).expect("valid CBOR")
    }

    #[test]
    fn test_unregistered_encodes_as_two_element_array() {
        let bytes = CborSerializer
            .serialize(&Message::new_unregistered(8))
            .unwrap();
        let decoded = decode(&bytes);
        assert_eq!(
            decoded,
            CborValue::Array(vec![CborValue::Integer(67.into()), CborValue::Integer(8.into())])
        );
    }

    #[test]
    fn test_structure_survives_decoding() {
        let message = Message::new_subscribe(11, Dict::new(), "com.example.topic");
        let bytes = CborSerializer.serialize(&message).unwrap();

        let CborValue::Array(fields) = decode(&bytes) else {
            panic!("expected CBOR array");
        };
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], CborValue::Integer(32.into()));
        assert_eq!(fields[2], CborValue::Map(Vec::new()));
        assert_eq!(
            fields[3],
            CborValue::Text("com.example.topic".to_string())
        );
    }

    #[test]
    fn test_null_payload_round_trips() {
        let message =
            Message::new_result(2, Dict::new(), Some(vec![Value::Null]), None);
        let bytes = CborSerializer.serialize(&message).unwrap();

        let CborValue::Array(fields) = decode(&bytes) else {
            panic!("expected CBOR array");
        };
        assert_eq!(fields[3], CborValue::Array(vec![CborValue::Null]));
    }
}
