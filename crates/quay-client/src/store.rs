use quay_cap::{Clobber, ConflictResolver, GatewayCall, Mutation, Retrier};
use quay_codec::Codec;
use quay_gateway::StoreGateway;
use quay_types::{Location, WritePolicy};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Read-modify-write operation against one key.
///
/// Always fetches first: the fetch yields the causal context the store
/// needs to order the write, and any siblings are resolved before the
/// mutation runs. The write carries that context back; with `return_body`
/// the store's post-write state is decoded and resolved again, since the
/// write itself can surface new siblings from concurrent writers.
///
/// Configure with the fluent setters, then call [`StoreOp::execute`]. A
/// configured operation can be executed repeatedly; its collaborators must
/// be stateless.
pub struct StoreOp<'a, T> {
    gateway: &'a dyn StoreGateway,
    location: Location,
    r: Option<u32>,
    w: Option<u32>,
    dw: Option<u32>,
    return_body: bool,
    retrier: Option<Box<dyn Retrier>>,
    mutation: Option<Box<dyn Mutation<T>>>,
    resolver: Option<Box<dyn ConflictResolver<T>>>,
    codec: Option<Box<dyn Codec<T>>>,
}

impl<'a, T> StoreOp<'a, T> {
    pub fn new(gateway: &'a dyn StoreGateway, location: Location) -> Self {
        Self {
            gateway,
            location,
            r: None,
            w: None,
            dw: None,
            return_body: false,
            retrier: None,
            mutation: None,
            resolver: None,
            codec: None,
        }
    }

    /// Read quorum for the pre-store fetch.
    pub fn r(mut self, quorum: u32) -> Self {
        self.r = Some(quorum);
        self
    }

    /// Write quorum for the store call.
    pub fn w(mut self, quorum: u32) -> Self {
        self.w = Some(quorum);
        self
    }

    /// Durable write quorum for the store call.
    pub fn dw(mut self, quorum: u32) -> Self {
        self.dw = Some(quorum);
        self
    }

    /// Ask the store for post-write state, resolved and returned by
    /// [`StoreOp::execute`].
    pub fn return_body(mut self, return_body: bool) -> Self {
        self.return_body = return_body;
        self
    }

    /// Retry policy for the fetch and store calls.
    pub fn retrier(mut self, retrier: impl Retrier + 'static) -> Self {
        self.retrier = Some(Box::new(retrier));
        self
    }

    /// Mutation applied to the resolved value.
    pub fn mutate_with(mut self, mutation: impl Mutation<T> + 'static) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    /// Sugar for an unconditional overwrite with `value`.
    pub fn value(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.mutation = Some(Box::new(Clobber::new(value)));
        self
    }

    /// Resolver for siblings of the fetch (and of the store response when
    /// `return_body` is set — it must be reusable).
    pub fn resolve_with(mut self, resolver: impl ConflictResolver<T> + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Codec converting between replica records and domain values.
    pub fn codec(mut self, codec: impl Codec<T> + 'static) -> Self {
        self.codec = Some(Box::new(codec));
        self
    }

    /// Run the operation: fetch, decode, resolve, mutate, encode, store.
    ///
    /// Returns `Ok(None)` when `return_body` is unset, otherwise the
    /// resolved post-write value (`None` if the store answered with no
    /// records).
    pub async fn execute(&self) -> ClientResult<Option<T>> {
        let retrier = self
            .retrier
            .as_deref()
            .ok_or(ClientError::Configuration("retrier"))?;
        let mutation = self
            .mutation
            .as_deref()
            .ok_or(ClientError::Configuration("mutation"))?;
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
        debug!(location = %self.location, siblings = read.sibling_count(), "fetched current state");

        let mut siblings = Vec::with_capacity(read.records.len());
        for record in &read.records {
            siblings.push(codec.decode(record)?);
        }

        let resolved = resolver.resolve(siblings)?;
        let mutated = mutation.apply(resolved);
        let record = codec.encode(&mutated, &self.location, read.context.as_ref())?;

        let policy = WritePolicy::new(self.w, self.dw, self.return_body);
        let store: GatewayCall<'_> = Box::new(move || {
            let record = record.clone();
            Box::pin(async move { gateway.store(record, policy).await })
        });
        let stored = retrier.attempt(store).await?;
        debug!(location = %self.location, return_body = self.return_body, "stored mutated value");

        if !self.return_body {
            return Ok(None);
        }

        let mut post = Vec::with_capacity(stored.records.len());
        for record in &stored.records {
            post.push(codec.decode(record)?);
        }
        Ok(resolver.resolve(post)?)
    }
}
