use serde::de::DeserializeOwned;
use serde::Serialize;

use quay_types::{CausalContext, Location, ReplicaRecord, CONTENT_TYPE_JSON};

use crate::error::CodecError;
use crate::traits::Codec;

/// JSON codec for any serde-serializable domain value.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn decode(&self, record: &ReplicaRecord) -> Result<T, CodecError> {
        if record.content_type != CONTENT_TYPE_JSON {
            return Err(CodecError::ContentType {
                expected: CONTENT_TYPE_JSON.into(),
                found: record.content_type.clone(),
            });
        }

        serde_json::from_slice(&record.payload).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode(
        &self,
        value: &T,
        location: &Location,
        context: Option<&CausalContext>,
    ) -> Result<ReplicaRecord, CodecError> {
        let payload =
            serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))?;

        let mut record = ReplicaRecord::new(location.clone(), payload, CONTENT_TYPE_JSON);
        if let Some(context) = context {
            record = record.with_context(context.clone());
        }
        Ok(record)
    }
}
