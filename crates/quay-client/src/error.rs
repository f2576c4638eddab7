use quay_cap::{ResolveError, RetryError};
use quay_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("retry policy gave up: {0}")]
    Retry(#[from] RetryError),

    #[error("sibling conflict unresolved: {0}")]
    Conflict(#[from] ResolveError),

    #[error("conversion failed: {0}")]
    Conversion(#[from] CodecError),

    #[error("operation not configured: missing {0}")]
    Configuration(&'static str),
}

pub type ClientResult<T> = Result<T, ClientError>;
