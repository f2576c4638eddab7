//! Conversion between raw replica records and domain values.
//!
//! A [`Codec`] sits between the gateway and the rest of an operation:
//! every record a read returns is decoded through it, and the value a
//! mutation produces is encoded back through it with the causal context
//! the read observed. Codecs must be stateless; one instance is used for
//! every record of an operation and across repeated executions.

pub mod error;
pub mod json;
pub mod raw;
pub mod traits;

pub use error::CodecError;
pub use json::JsonCodec;
pub use raw::RawCodec;
pub use traits::Codec;
