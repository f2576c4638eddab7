use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque causal-context token issued by the store on a read.
///
/// Captures "what version of a key this read observed" (typically an
/// encoded vector clock). The client never inspects it; it is handed back
/// unmodified on the following write so the store can detect concurrent
/// modification. A token is only valid for the operation that read it —
/// reusing a stale one makes the store treat the write as concurrent,
/// which is the intended optimistic-concurrency signal.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CausalContext(Vec<u8>);

impl CausalContext {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for CausalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CausalContext({})", hex::encode(&self.0))
    }
}

impl fmt::Display for CausalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_opaque_bytes() {
        let context = CausalContext::from_bytes(vec![1, 2, 3]);
        assert_eq!(context.as_bytes(), &[1, 2, 3]);
        assert_eq!(context.clone().into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_renders_hex() {
        let context = CausalContext::from_bytes(vec![0xde, 0xad]);
        assert_eq!(format!("{context:?}"), "CausalContext(dead)");
    }

    #[test]
    fn equality_is_byte_equality() {
        let a = CausalContext::from_bytes(vec![7]);
        let b = CausalContext::from_bytes(vec![7]);
        let c = CausalContext::from_bytes(vec![8]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
