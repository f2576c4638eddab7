use quay_gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot reduce {siblings} siblings without a merge strategy")]
    UnresolvedConflict { siblings: usize },

    #[error("resolver rejected siblings: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum RetryError {
    #[error("gave up after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: GatewayError,
    },

    #[error("aborted on non-recoverable failure: {0}")]
    Aborted(#[from] GatewayError),
}
