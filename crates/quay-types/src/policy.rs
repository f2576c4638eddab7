use serde::{Deserialize, Serialize};

/// Quorum and response options for a single store call.
///
/// `None` for a quorum means "use the store's default", which is distinct
/// from any numeric value. Built once per operation from its fluent
/// configuration; immutable once the operation starts executing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePolicy {
    /// Write quorum: replicas that must acknowledge the write.
    pub w: Option<u32>,
    /// Durable write quorum: replicas that must persist the write.
    pub dw: Option<u32>,
    /// Ask the store to return post-write replica state in the response.
    pub return_body: bool,
}

impl WritePolicy {
    pub fn new(w: Option<u32>, dw: Option<u32>, return_body: bool) -> Self {
        Self { w, dw, return_body }
    }
}
