use crate::models::Item;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::OnceCell;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        // Descending created_at index serves the newest-first listing
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.items()
            .create_index(created_at_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create created_at index on items collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on items.created_at");

        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB ping failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn items(&self) -> Collection<Item> {
        self.db.collection("items")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

/// Process-wide cached MongoDB handle.
///
/// `ensure_connected` is idempotent: the first caller starts a connect
/// attempt, concurrent callers await that same attempt, and every later
/// caller gets the cached handle. A failed attempt is not cached, so the
/// next request retries instead of reusing a rejected attempt.
#[derive(Clone)]
pub struct ConnectionManager {
    uri: String,
    database: String,
    cell: Arc<OnceCell<MongoDb>>,
}

impl ConnectionManager {
    pub fn new(uri: &str, database: &str) -> Self {
        Self {
            uri: uri.to_string(),
            database: database.to_string(),
            cell: Arc::new(OnceCell::new()),
        }
    }

    pub async fn ensure_connected(&self) -> Result<&MongoDb, AppError> {
        self.cell
            .get_or_try_init(|| async {
                let db = MongoDb::connect(&self.uri, &self.database).await?;
                db.initialize_indexes().await?;
                Ok(db)
            })
            .await
    }

    /// The cached handle, if a connection has been established.
    pub fn get(&self) -> Option<&MongoDb> {
        self.cell.get()
    }

    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }
}
