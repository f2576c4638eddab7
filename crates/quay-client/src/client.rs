use quay_gateway::StoreGateway;
use quay_types::Location;

use crate::delete::DeleteOp;
use crate::fetch::FetchOp;
use crate::store::StoreOp;

/// Entry point for operations against one bucket of a store.
///
/// Owns the gateway; each operation borrows it, so independent operations
/// minted from one client can run concurrently.
pub struct StoreClient<G> {
    gateway: G,
    bucket: String,
}

impl<G: StoreGateway> StoreClient<G> {
    pub fn new(gateway: G, bucket: impl Into<String>) -> Self {
        Self {
            gateway,
            bucket: bucket.into(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Begin a read-modify-write operation for `key`.
    pub fn store<T>(&self, key: &str) -> StoreOp<'_, T> {
        StoreOp::new(&self.gateway, self.location(key))
    }

    /// Begin a fetch operation for `key`.
    pub fn fetch<T>(&self, key: &str) -> FetchOp<'_, T> {
        FetchOp::new(&self.gateway, self.location(key))
    }

    /// Begin a delete operation for `key`.
    pub fn delete(&self, key: &str) -> DeleteOp<'_> {
        DeleteOp::new(&self.gateway, self.location(key))
    }

    fn location(&self, key: &str) -> Location {
        Location::new(self.bucket.as_str(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    use quay_cap::{DefaultResolver, FixedRetrier};
    use quay_codec::JsonCodec;
    use quay_gateway::InMemoryGateway;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
    }

    #[tokio::test]
    async fn store_fetch_delete_through_the_facade() {
        let client = StoreClient::new(InMemoryGateway::new(), "profiles");

        let stored = client
            .store("alice")
            .value(Profile { name: "Alice".into() })
            .resolve_with(DefaultResolver::new())
            .codec(JsonCodec::new())
            .retrier(FixedRetrier::new(1))
            .return_body(true)
            .execute()
            .await
            .unwrap();
        assert_eq!(stored, Some(Profile { name: "Alice".into() }));

        let fetched: Option<Profile> = client
            .fetch("alice")
            .resolve_with(DefaultResolver::new())
            .codec(JsonCodec::new())
            .retrier(FixedRetrier::new(1))
            .execute()
            .await
            .unwrap();
        assert_eq!(fetched, stored);

        client
            .delete("alice")
            .fetch_first(true)
            .retrier(FixedRetrier::new(1))
            .execute()
            .await
            .unwrap();

        let gone: Option<Profile> = client
            .fetch("alice")
            .resolve_with(DefaultResolver::new())
            .codec(JsonCodec::new())
            .retrier(FixedRetrier::new(1))
            .execute()
            .await
            .unwrap();
        assert_eq!(gone, None);
    }

    #[tokio::test]
    async fn keys_live_under_the_clients_bucket() {
        let client = StoreClient::new(InMemoryGateway::new(), "profiles");
        assert_eq!(client.bucket(), "profiles");

        client
            .store("bob")
            .value(Profile { name: "Bob".into() })
            .resolve_with(DefaultResolver::new())
            .codec(JsonCodec::new())
            .retrier(FixedRetrier::new(0))
            .execute()
            .await
            .unwrap();

        let other = Location::new("accounts", "bob");
        assert!(client.gateway().fetch(&other, None).await.unwrap().is_absent());
        let own = Location::new("profiles", "bob");
        assert!(!client.gateway().fetch(&own, None).await.unwrap().is_absent());
    }
}
