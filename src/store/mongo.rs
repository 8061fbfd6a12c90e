use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{oid::ObjectId, Document};
use mongodb::{Client, Database};
use tracing::info;

use super::{Store, StoreError};

/// MongoDB-backed store. The driver maintains its own connection pool, so
/// this handle is cheap to share behind an Arc.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Builds a client for `uri` and opens `database`. The driver connects
    /// lazily, so this only fails on a malformed URI, not on an unreachable
    /// server.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        info!(database = %database, "MongoDB client initialized");
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, StoreError> {
        let result = self.collection(collection).insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Backend("insert did not return an ObjectId".to_string())
        })
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(filter).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<u64, StoreError> {
        Ok(self.collection(collection).count_documents(filter).await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }
}
