use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("quorum not satisfied: required {required}, reachable replicas {reachable}")]
    QuorumNotSatisfied { required: u32, reachable: u32 },

    #[error("malformed request: {0}")]
    InvalidRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// Whether a retry policy may reasonably try this call again.
    ///
    /// Unavailability, timeouts, and I/O failures are transient. A
    /// malformed request stays malformed, and a quorum that cannot be met
    /// against the current replica set will not be met on the next attempt
    /// either.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GatewayError::Unavailable(_) | GatewayError::Timeout(_) | GatewayError::Io(_)
        )
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
