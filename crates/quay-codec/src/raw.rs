use quay_types::{CausalContext, Location, ReplicaRecord, CONTENT_TYPE_OCTET_STREAM};

use crate::error::CodecError;
use crate::traits::Codec;

/// Pass-through codec: the domain value is the raw payload.
///
/// Accepts any content type on decode and writes octet-stream on encode.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCodec;

impl RawCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec<Vec<u8>> for RawCodec {
    fn decode(&self, record: &ReplicaRecord) -> Result<Vec<u8>, CodecError> {
        Ok(record.payload.clone())
    }

    fn encode(
        &self,
        value: &Vec<u8>,
        location: &Location,
        context: Option<&CausalContext>,
    ) -> Result<ReplicaRecord, CodecError> {
        let mut record =
            ReplicaRecord::new(location.clone(), value.clone(), CONTENT_TYPE_OCTET_STREAM);
        if let Some(context) = context {
            record = record.with_context(context.clone());
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_passes_through_unchanged() {
        let codec = RawCodec::new();
        let location = Location::new("blobs", "b1");
        let record = codec.encode(&vec![1, 2, 3], &location, None).unwrap();
        assert_eq!(record.content_type, CONTENT_TYPE_OCTET_STREAM);
        assert_eq!(codec.decode(&record).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn decode_ignores_content_type() {
        let codec = RawCodec::new();
        let record = ReplicaRecord::new(Location::new("b", "k"), b"text".to_vec(), "text/plain");
        assert_eq!(codec.decode(&record).unwrap(), b"text".to_vec());
    }
}
