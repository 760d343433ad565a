use mongodb::Client;
use mongodb::bson::doc;

/// Probe MongoDB with a `ping` command.
///
/// Used by the readiness endpoint, so this stays cheap and never errors:
/// any failure just reports the deployment as unhealthy.
///
/// # Example
/// ```ignore
/// use database::mongodb::{check_health, connect};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// if !check_health(&client).await {
///     tracing::warn!("MongoDB is not answering");
/// }
/// ```
pub async fn check_health(client: &Client) -> bool {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health_against_live_server() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(check_health(&client).await);
    }
}
