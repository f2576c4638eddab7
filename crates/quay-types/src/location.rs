use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a key in the store: a bucket namespace plus the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    bucket: String,
    key: String,
}

impl Location {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_bucket_and_key() {
        let location = Location::new("users", "alice");
        assert_eq!(format!("{location}"), "users/alice");
    }

    #[test]
    fn equality_covers_both_parts() {
        assert_eq!(Location::new("a", "k"), Location::new("a", "k"));
        assert_ne!(Location::new("a", "k"), Location::new("b", "k"));
        assert_ne!(Location::new("a", "k"), Location::new("a", "j"));
    }

    #[test]
    fn serde_roundtrip() {
        let location = Location::new("carts", "cart-42");
        let json = serde_json::to_string(&location).unwrap();
        let parsed: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(location, parsed);
    }
}
