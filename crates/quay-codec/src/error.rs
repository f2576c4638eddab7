use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode replica payload: {0}")]
    Decode(String),

    #[error("failed to encode value: {0}")]
    Encode(String),

    #[error("unexpected content type {found:?}, expected {expected:?}")]
    ContentType { expected: String, found: String },
}
