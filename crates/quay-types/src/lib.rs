//! Foundation types for the Quay client.
//!
//! An eventually consistent store can hold several concurrent versions
//! ("siblings") of one key. These types model what a client sees of that:
//! the location of a key, the opaque causal context a read observed, the
//! raw replica records a response carries, and the quorum options a write
//! is issued under.

pub mod context;
pub mod location;
pub mod policy;
pub mod record;

pub use context::CausalContext;
pub use location::Location;
pub use policy::WritePolicy;
pub use record::{ReadResponse, ReplicaRecord, CONTENT_TYPE_JSON, CONTENT_TYPE_OCTET_STREAM};
