use mongodb::bson::doc;
use serde::Serialize;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::Product;
use crate::seed;
use crate::store::DynStore;

/// Collection holding catalog products.
pub const PRODUCT_COLLECTION: &str = "product";

/// Page size applied when a list request names no limit.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Health report caps the collection listing at this many names.
const MAX_HEALTH_COLLECTIONS: usize = 10;

/// Stateless facade over the document store; every operation is a single
/// store round-trip. Cloning is cheap, the store handle lives behind an Arc.
#[derive(Clone)]
pub struct CatalogService {
    store: Option<DynStore>,
}

#[derive(Debug, Serialize)]
pub struct SeedOutcome {
    pub seeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Store side of the health report. Status strings are tiered diagnostics,
/// not a stable machine contract.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub database: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl CatalogService {
    pub fn new(store: Option<DynStore>) -> Self {
        Self { store }
    }

    /// Lists up to `limit` products, optionally restricted to one category.
    /// A missing store degrades to an empty list so the read path never
    /// fails just because no database is configured; an erroring store
    /// still propagates.
    pub async fn list(&self, category: Option<&str>, limit: i64) -> AppResult<Vec<Product>> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };
        let documents = store.find(PRODUCT_COLLECTION, filter, limit.max(0)).await?;
        Ok(documents.into_iter().map(Product::from_document).collect())
    }

    /// Persists one validated product and returns the store-assigned id as
    /// text.
    pub async fn create(&self, product: &Product) -> AppResult<String> {
        let store = self.store.as_ref().ok_or(AppError::StoreUnavailable)?;
        let id = store
            .insert_one(PRODUCT_COLLECTION, product.to_document())
            .await?;
        Ok(id.to_hex())
    }

    /// Inserts the demo catalog unless any product already exists. Safe to
    /// call repeatedly: only the first call on an empty store writes.
    pub async fn seed(&self) -> AppResult<SeedOutcome> {
        let store = self.store.as_ref().ok_or(AppError::StoreUnavailable)?;
        let existing = store.count_documents(PRODUCT_COLLECTION, doc! {}).await?;
        if existing > 0 {
            return Ok(SeedOutcome {
                seeded: false,
                count: None,
                message: Some("Products already exist".to_string()),
            });
        }

        let products = seed::demo_products();
        let count = products.len();
        for product in &products {
            store
                .insert_one(PRODUCT_COLLECTION, product.to_document())
                .await?;
        }
        info!(count, "Seeded demo catalog");
        Ok(SeedOutcome {
            seeded: true,
            count: Some(count),
            message: None,
        })
    }

    /// Best-effort store introspection. Each sub-check catches its own
    /// failures and renders them as status text; this never returns an
    /// error, whatever state the store is in.
    pub async fn health_check(&self) -> StoreHealth {
        let Some(store) = &self.store else {
            return StoreHealth {
                database: "not configured".to_string(),
                connection_status: "not connected".to_string(),
                collections: Vec::new(),
            };
        };

        match store.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_HEALTH_COLLECTIONS);
                StoreHealth {
                    database: "connected and working".to_string(),
                    connection_status: "connected".to_string(),
                    collections,
                }
            }
            Err(err) => StoreHealth {
                database: format!("configured but erroring: {}", err.summary()),
                connection_status: "connected".to_string(),
                collections: Vec::new(),
            },
        }
    }
}
