use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use thiserror::Error;

pub mod mongo;

pub use mongo::MongoStore;

/// Shared handle to whatever store backend the process was started with.
pub type DynStore = Arc<dyn Store>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Truncated rendering for embedding in status reports.
    pub fn summary(&self) -> String {
        self.to_string().chars().take(50).collect()
    }
}

/// The document store as the catalog consumes it. Each method is a single
/// round-trip; the implementation owns pooling and reconnection.
#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts one document and returns the store-assigned identifier.
    async fn insert_one(&self, collection: &str, document: Document)
        -> Result<ObjectId, StoreError>;

    /// Returns up to `limit` documents matching `filter`, in no guaranteed
    /// order. A limit of zero means unbounded, matching MongoDB semantics.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    async fn count_documents(&self, collection: &str, filter: Document)
        -> Result<u64, StoreError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}
