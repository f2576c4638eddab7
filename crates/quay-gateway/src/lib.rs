//! Transport boundary between Quay operations and a replicated store.
//!
//! Operations never talk to a store directly; they go through the
//! [`StoreGateway`] trait, which hides the wire protocol and connection
//! management entirely. [`InMemoryGateway`] is a single-process stand-in
//! that reproduces the store's sibling semantics for tests and demos.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{GatewayError, GatewayResult};
pub use memory::InMemoryGateway;
pub use traits::StoreGateway;
