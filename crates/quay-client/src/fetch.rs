use quay_cap::{ConflictResolver, GatewayCall, Retrier};
use quay_codec::Codec;
use quay_gateway::StoreGateway;
use quay_types::Location;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Read operation against one key: fetch, decode each sibling, resolve.
///
/// `Ok(None)` means the key is absent (or the resolver mapped its siblings
/// to absence).
pub struct FetchOp<'a, T> {
    gateway: &'a dyn StoreGateway,
    location: Location,
    r: Option<u32>,
    retrier: Option<Box<dyn Retrier>>,
    resolver: Option<Box<dyn ConflictResolver<T>>>,
    codec: Option<Box<dyn Codec<T>>>,
}

impl<'a, T> FetchOp<'a, T> {
    pub fn new(gateway: &'a dyn StoreGateway, location: Location) -> Self {
        Self {
            gateway,
            location,
            r: None,
            retrier: None,
            resolver: None,
            codec: None,
        }
    }

    /// Read quorum for the fetch.
    pub fn r(mut self, quorum: u32) -> Self {
        self.r = Some(quorum);
        self
    }

    pub fn retrier(mut self, retrier: impl Retrier + 'static) -> Self {
        self.retrier = Some(Box::new(retrier));
        self
    }

    pub fn resolve_with(mut self, resolver: impl ConflictResolver<T> + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn codec(mut self, codec: impl Codec<T> + 'static) -> Self {
        self.codec = Some(Box::new(codec));
        self
    }

    pub async fn execute(&self) -> ClientResult<Option<T>> {
        let retrier = self
            .retrier
            .as_deref()
            .ok_or(ClientError::Configuration("retrier"))?;
        let resolver = self
            .resolver
            .as_deref()
            .ok_or(ClientError::Configuration("resolver"))?;
        let codec = self
            .codec
            .as_deref()
            .ok_or(ClientError::Configuration("codec"))?;

        let gateway = self.gateway;
        let location = &self.location;
        let r = self.r;

        let fetch: GatewayCall<'_> =
            Box::new(move || Box::pin(async move { gateway.fetch(location, r).await }));
        let read = retrier.attempt(fetch).await?;
        debug!(location = %self.location, siblings = read.sibling_count(), "fetched");

        let mut siblings = Vec::with_capacity(read.records.len());
        for record in &read.records {
            siblings.push(codec.decode(record)?);
        }
        Ok(resolver.resolve(siblings)?)
    }
}
