use serde::{Deserialize, Serialize};

use crate::context::CausalContext;
use crate::location::Location;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Raw record for one physical copy of a key, as the store returns it.
///
/// Produced by the gateway, consumed only by a codec. The payload carries
/// whatever the stored representation is; `content_type` tells codecs what
/// to expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaRecord {
    pub location: Location,
    pub payload: Vec<u8>,
    pub content_type: String,
    pub context: Option<CausalContext>,
}

impl ReplicaRecord {
    pub fn new(
        location: Location,
        payload: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            location,
            payload: payload.into(),
            content_type: content_type.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: CausalContext) -> Self {
        self.context = Some(context);
        self
    }
}

/// What a read (or a store with `return_body`) yields: zero or more sibling
/// records plus the causal context the store issued for them.
///
/// Zero records means the key is absent; sibling order is whatever the
/// store returned and carries no meaning beyond deterministic tie-breaking
/// by resolvers that choose to use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadResponse {
    pub records: Vec<ReplicaRecord>,
    pub context: Option<CausalContext>,
}

impl ReadResponse {
    pub fn new(records: Vec<ReplicaRecord>, context: Option<CausalContext>) -> Self {
        Self { records, context }
    }

    /// The ack shape: no records, no context. Used for absent keys and for
    /// stores issued without `return_body`.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            context: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sibling_count(&self) -> usize {
        self.records.len()
    }
}
