//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.
//! Each instance gets its own container, so tests are isolated from each other
//! and can run in parallel.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    pub client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestMongo;
    ///
    /// # async fn example() {
    /// let mongo = TestMongo::new().await;
    /// let db = mongo.database("storefront_test");
    /// # }
    /// ```
    pub async fn new() -> Self {
        // Use Mongo 7 to match production
        let mongo = Mongo::default().with_tag("7.0");

        let container = mongo
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get host port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to connect to test MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready (Mongo 7)");

        Self {
            container,
            client,
            connection_string,
        }
    }

    /// Get a handle to a named database on the test instance
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Get a cloned client (useful for health checks and shutdown paths)
    pub fn client(&self) -> Client {
        self.client.clone()
    }
}

// Container is automatically cleaned up when TestMongo is dropped
impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_mongo_creation() {
        let mongo = TestMongo::new().await;
        assert!(mongo.connection_string.starts_with("mongodb://"));

        // Ping to confirm the instance actually answers
        mongo
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .expect("ping should succeed");
    }

    #[tokio::test]
    async fn test_mongo_instances_are_isolated() {
        let mongo1 = TestMongo::new().await;
        let mongo2 = TestMongo::new().await;

        assert_ne!(mongo1.connection_string, mongo2.connection_string);
    }
}
