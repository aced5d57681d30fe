use mongodb::{options::ClientOptions, Client, Database};
use std::env;

use dotenvy::dotenv;
use tracing::info;

use crate::storage::StoreError;

pub async fn init_db() -> Result<Database, StoreError> {
    dotenv().ok();

    let mongo_uri = env::var("MONGO_URI")
        .map_err(|_| StoreError::Unavailable("MONGO_URI must be set in .env".to_string()))?;
    let db_name = env::var("DB_NAME")
        .map_err(|_| StoreError::Unavailable("DB_NAME must be set in .env".to_string()))?;

    let mut client_options = ClientOptions::parse(&mongo_uri)
        .await
        .map_err(|e| StoreError::Unavailable(format!("Failed to parse MongoDB URI: {}", e)))?;

    client_options.app_name = Some("CanteenSurvey".to_string());

    let client = Client::with_options(client_options).map_err(|e| {
        StoreError::Unavailable(format!("Failed to initialize MongoDB client: {}", e))
    })?;

    info!("Database connection successful");

    Ok(client.database(&db_name))
}
