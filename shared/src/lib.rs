pub mod remote;
pub mod theme;
pub mod types;

use aws_sdk_dynamodb::Client as DynamoClient;

/// Shared clients and configuration for a running session.
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub table_name: String,
}

impl AppState {
    /// Build the shared clients from the ambient AWS environment. The
    /// record table comes from TABLE_NAME, defaulting to "zen".
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let dynamo_client = DynamoClient::new(&config);
        let table_name = std::env::var("TABLE_NAME").unwrap_or_else(|_| "zen".to_string());
        tracing::info!("App state initialized for table {}", table_name);
        Self {
            dynamo_client,
            table_name,
        }
    }
}
