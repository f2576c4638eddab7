//! Consistency and availability capabilities.
//!
//! The three pluggable behaviors a read-modify-write operation composes:
//! reducing sibling versions to one value ([`ConflictResolver`]), producing
//! the value to write ([`Mutation`]), and driving fallible gateway calls
//! ([`Retrier`]). Resolvers and mutations must be pure; one operation
//! invokes the resolver at two different points, and a configured
//! operation may be executed repeatedly.

pub mod error;
pub mod mutation;
pub mod resolver;
pub mod retrier;

pub use error::{ResolveError, RetryError};
pub use mutation::{Clobber, Mutation, MutationFn};
pub use resolver::{ConflictResolver, DefaultResolver, ResolverFn};
pub use retrier::{FixedRetrier, GatewayCall, GatewayFuture, Retrier};
