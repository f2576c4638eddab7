use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use quay_types::{CausalContext, Location, ReadResponse, ReplicaRecord, WritePolicy};
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};
use crate::traits::StoreGateway;

/// In-memory store simulation for tests, local demos, and embedding.
///
/// Reproduces the sibling semantics of an eventually consistent store on a
/// single logical replica set: a write whose causal context matches the
/// current version replaces all siblings (it descends from them), while a
/// write with a missing or stale context is treated as concurrent and
/// lands as an additional sibling.
pub struct InMemoryGateway {
    replicas: u32,
    inner: RwLock<GatewayState>,
}

#[derive(Default)]
struct GatewayState {
    entries: HashMap<Location, Entry>,
    clock: u64,
}

struct Entry {
    siblings: Vec<StoredValue>,
    version: u64,
}

struct StoredValue {
    payload: Vec<u8>,
    content_type: String,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::with_replicas(3)
    }

    /// Simulate a replica set of the given size. Quorums above it fail
    /// with [`GatewayError::QuorumNotSatisfied`].
    pub fn with_replicas(replicas: u32) -> Self {
        Self {
            replicas,
            inner: RwLock::new(GatewayState::default()),
        }
    }

    /// Number of sibling versions currently held for `location`.
    pub fn sibling_count(&self, location: &Location) -> usize {
        self.inner
            .read()
            .map(|state| {
                state
                    .entries
                    .get(location)
                    .map(|entry| entry.siblings.len())
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    fn check_quorum(&self, quorum: Option<u32>) -> GatewayResult<()> {
        match quorum {
            Some(required) if required > self.replicas => {
                Err(GatewayError::QuorumNotSatisfied {
                    required,
                    reachable: self.replicas,
                })
            }
            _ => Ok(()),
        }
    }

    fn response_for(entry: &Entry, location: &Location) -> ReadResponse {
        let token = context_for(entry.version);
        let records = entry
            .siblings
            .iter()
            .map(|value| {
                ReplicaRecord::new(location.clone(), value.payload.clone(), &value.content_type)
                    .with_context(token.clone())
            })
            .collect();
        ReadResponse::new(records, Some(token))
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreGateway for InMemoryGateway {
    async fn fetch(&self, location: &Location, r: Option<u32>) -> GatewayResult<ReadResponse> {
        self.check_quorum(r)?;

        let state = self
            .inner
            .read()
            .map_err(|_| GatewayError::Unavailable("gateway read lock poisoned".into()))?;

        Ok(match state.entries.get(location) {
            Some(entry) => Self::response_for(entry, location),
            None => ReadResponse::empty(),
        })
    }

    async fn store(
        &self,
        record: ReplicaRecord,
        policy: WritePolicy,
    ) -> GatewayResult<ReadResponse> {
        self.check_quorum(policy.w)?;
        self.check_quorum(policy.dw)?;

        let mut state = self
            .inner
            .write()
            .map_err(|_| GatewayError::Unavailable("gateway write lock poisoned".into()))?;

        state.clock += 1;
        let version = state.clock;

        let value = StoredValue {
            payload: record.payload,
            content_type: record.content_type,
        };

        let entry = state
            .entries
            .entry(record.location.clone())
            .or_insert_with(|| Entry {
                siblings: Vec::new(),
                version: 0,
            });

        if entry.version == 0 {
            entry.siblings.push(value);
        } else {
            let current = context_for(entry.version);
            if record.context.as_ref() == Some(&current) {
                // Descendant write: supersedes every sibling it read.
                entry.siblings = vec![value];
            } else {
                debug!(location = %record.location, siblings = entry.siblings.len() + 1,
                    "concurrent write created sibling");
                entry.siblings.push(value);
            }
        }
        entry.version = version;

        if policy.return_body {
            let entry = state
                .entries
                .get(&record.location)
                .ok_or_else(|| GatewayError::Unavailable("entry vanished mid-store".into()))?;
            Ok(Self::response_for(entry, &record.location))
        } else {
            Ok(ReadResponse::empty())
        }
    }

    async fn delete(
        &self,
        location: &Location,
        rw: Option<u32>,
        context: Option<CausalContext>,
    ) -> GatewayResult<()> {
        self.check_quorum(rw)?;

        let mut state = self
            .inner
            .write()
            .map_err(|_| GatewayError::Unavailable("gateway write lock poisoned".into()))?;

        let should_remove = match state.entries.get(location) {
            None => false,
            Some(entry) => {
                let current = context_for(entry.version);
                match &context {
                    // A stale context lost the race; the concurrent write wins.
                    Some(token) if *token != current => {
                        debug!(location = %location, "stale delete ignored");
                        false
                    }
                    _ => true,
                }
            }
        };
        if should_remove {
            state.entries.remove(location);
        }

        Ok(())
    }
}

fn context_for(version: u64) -> CausalContext {
    CausalContext::from_bytes(version.to_be_bytes().to_vec())
}
