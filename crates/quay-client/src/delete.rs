use quay_cap::{GatewayCall, Retrier};
use quay_gateway::StoreGateway;
use quay_types::{Location, ReadResponse};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Delete operation against one key.
///
/// With `fetch_first`, a read is issued before the delete and its causal
/// context conditions the removal, so a delete based on a superseded view
/// loses to concurrent writers instead of discarding their data.
pub struct DeleteOp<'a> {
    gateway: &'a dyn StoreGateway,
    location: Location,
    rw: Option<u32>,
    r: Option<u32>,
    fetch_first: bool,
    retrier: Option<Box<dyn Retrier>>,
}

impl<'a> DeleteOp<'a> {
    pub fn new(gateway: &'a dyn StoreGateway, location: Location) -> Self {
        Self {
            gateway,
            location,
            rw: None,
            r: None,
            fetch_first: false,
            retrier: None,
        }
    }

    /// Delete quorum.
    pub fn rw(mut self, quorum: u32) -> Self {
        self.rw = Some(quorum);
        self
    }

    /// Read quorum for the pre-delete fetch (only used with `fetch_first`).
    pub fn r(mut self, quorum: u32) -> Self {
        self.r = Some(quorum);
        self
    }

    /// Fetch before deleting and condition the delete on the causal
    /// context that fetch observed.
    pub fn fetch_first(mut self, fetch_first: bool) -> Self {
        self.fetch_first = fetch_first;
        self
    }

    pub fn retrier(mut self, retrier: impl Retrier + 'static) -> Self {
        self.retrier = Some(Box::new(retrier));
        self
    }

    pub async fn execute(&self) -> ClientResult<()> {
        let retrier = self
            .retrier
            .as_deref()
            .ok_or(ClientError::Configuration("retrier"))?;

        let gateway = self.gateway;
        let location = &self.location;

        let context = if self.fetch_first {
            let r = self.r;
            let fetch: GatewayCall<'_> =
                Box::new(move || Box::pin(async move { gateway.fetch(location, r).await }));
            retrier.attempt(fetch).await?.context
        } else {
            None
        };

        let rw = self.rw;
        let delete: GatewayCall<'_> = Box::new(move || {
            let context = context.clone();
            Box::pin(async move {
                gateway
                    .delete(location, rw, context)
                    .await
                    .map(|()| ReadResponse::empty())
            })
        });
        retrier.attempt(delete).await?;
        debug!(location = %self.location, fetch_first = self.fetch_first, "deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use quay_cap::FixedRetrier;
    use quay_gateway::{GatewayResult, InMemoryGateway};
    use quay_types::{
        CausalContext, ReplicaRecord, WritePolicy, CONTENT_TYPE_OCTET_STREAM,
    };

    fn location() -> Location {
        Location::new("bucket", "k")
    }

    async fn seed(gateway: &InMemoryGateway) {
        gateway
            .store(
                ReplicaRecord::new(location(), b"v".to_vec(), CONTENT_TYPE_OCTET_STREAM),
                WritePolicy::default(),
            )
            .await
            .unwrap();
    }

    /// Records the context each delete call carried.
    struct CapturingGateway {
        inner: InMemoryGateway,
        delete_contexts: Mutex<Vec<Option<CausalContext>>>,
    }

    impl CapturingGateway {
        fn new() -> Self {
            Self {
                inner: InMemoryGateway::new(),
                delete_contexts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StoreGateway for CapturingGateway {
        async fn fetch(
            &self,
            location: &Location,
            r: Option<u32>,
        ) -> GatewayResult<quay_types::ReadResponse> {
            self.inner.fetch(location, r).await
        }

        async fn store(
            &self,
            record: ReplicaRecord,
            policy: WritePolicy,
        ) -> GatewayResult<quay_types::ReadResponse> {
            self.inner.store(record, policy).await
        }

        async fn delete(
            &self,
            location: &Location,
            rw: Option<u32>,
            context: Option<CausalContext>,
        ) -> GatewayResult<()> {
            self.delete_contexts.lock().unwrap().push(context.clone());
            self.inner.delete(location, rw, context).await
        }
    }

    #[tokio::test]
    async fn unconditional_delete_removes_key() {
        let gateway = InMemoryGateway::new();
        seed(&gateway).await;

        DeleteOp::new(&gateway, location())
            .retrier(FixedRetrier::new(0))
            .execute()
            .await
            .unwrap();

        assert!(gateway.fetch(&location(), None).await.unwrap().is_absent());
    }

    #[tokio::test]
    async fn fetch_first_threads_the_observed_context() {
        let gateway = CapturingGateway::new();
        seed(&gateway.inner).await;
        let expected = gateway
            .inner
            .fetch(&location(), None)
            .await
            .unwrap()
            .context;

        DeleteOp::new(&gateway, location())
            .fetch_first(true)
            .r(1)
            .rw(2)
            .retrier(FixedRetrier::new(0))
            .execute()
            .await
            .unwrap();

        let contexts = gateway.delete_contexts.lock().unwrap();
        assert_eq!(*contexts, vec![expected]);
        drop(contexts);
        assert!(gateway.fetch(&location(), None).await.unwrap().is_absent());
    }

    #[tokio::test]
    async fn delete_of_absent_key_is_a_no_op() {
        let gateway = InMemoryGateway::new();
        DeleteOp::new(&gateway, location())
            .fetch_first(true)
            .retrier(FixedRetrier::new(0))
            .execute()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_retrier_is_a_configuration_error() {
        let gateway = InMemoryGateway::new();
        let error = DeleteOp::new(&gateway, location())
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(error, ClientError::Configuration("retrier")));
    }
}
