//! Client-side operations for eventually consistent key-value stores.
//!
//! A store that accepts concurrent writes can hand back several sibling
//! versions of one key. The operations here compose four pluggable
//! behaviors — codec, conflict resolver, mutation, and retry policy —
//! into replay-safe reads and writes:
//!
//! - [`StoreOp`]: fetch, decode, resolve, mutate, encode, store, carrying
//!   the causal context from the fetch into the write.
//! - [`FetchOp`]: fetch, decode, resolve.
//! - [`DeleteOp`]: optionally fetch-first, then delete under the observed
//!   context.
//!
//! [`StoreClient`] mints these operations for keys of one bucket.
//!
//! Failures keep their stage: retry exhaustion at the gateway boundary,
//! unresolved conflicts, conversion failures, and configuration errors are
//! distinct [`ClientError`] variants, and only the gateway calls are ever
//! retried.

pub mod client;
pub mod delete;
pub mod error;
pub mod fetch;
pub mod store;

pub use client::StoreClient;
pub use delete::DeleteOp;
pub use error::{ClientError, ClientResult};
pub use fetch::FetchOp;
pub use store::StoreOp;
