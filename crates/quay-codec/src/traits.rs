use quay_types::{CausalContext, Location, ReplicaRecord};

use crate::error::CodecError;

/// Converts between one raw replica record and one domain value.
///
/// `encode` must accept any value the operation's mutation can legally
/// produce; if it cannot represent a value, the whole operation aborts
/// before a write is attempted. Both directions fail with [`CodecError`],
/// which is never retried.
pub trait Codec<T>: Send + Sync {
    fn decode(&self, record: &ReplicaRecord) -> Result<T, CodecError>;

    /// Encode `value` for `location`, attaching the causal context the
    /// preceding read observed (if any).
    fn encode(
        &self,
        value: &T,
        location: &Location,
        context: Option<&CausalContext>,
    ) -> Result<ReplicaRecord, CodecError>;
}
