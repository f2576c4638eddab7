use async_trait::async_trait;
use quay_types::{CausalContext, Location, ReadResponse, ReplicaRecord, WritePolicy};

use crate::error::GatewayResult;

/// Transport boundary to a replicated key-value store.
///
/// A read returns every sibling currently visible for a key along with the
/// causal context the store issued for that view. A write carries one
/// record (whose `context` field holds the token from a prior read) and a
/// [`WritePolicy`]; when `return_body` is unset the store answers with an
/// empty ack response.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Read the current state of `location`. `r` is the read quorum;
    /// `None` means the store default.
    async fn fetch(&self, location: &Location, r: Option<u32>) -> GatewayResult<ReadResponse>;

    /// Write one record under `policy`. The response carries post-write
    /// replica state only when `policy.return_body` is set.
    async fn store(&self, record: ReplicaRecord, policy: WritePolicy) -> GatewayResult<ReadResponse>;

    /// Remove a key. A `context` conditions the delete on the version a
    /// prior read observed; `rw` is the delete quorum.
    async fn delete(
        &self,
        location: &Location,
        rw: Option<u32>,
        context: Option<CausalContext>,
    ) -> GatewayResult<()>;
}
