pub mod products;

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Clothing Brand Backend is running" }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// Diagnostic report combining the store sub-checks with the configuration
/// flags. Status strings are tiered diagnostics for humans, not a stable
/// machine contract.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_flag(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}

/// GET /test — answers 200 whatever state the store is in.
pub async fn test_database(State(state): State<AppState>) -> Json<HealthReport> {
    let store = state.catalog.health_check().await;
    Json(HealthReport {
        backend: "running".to_string(),
        database: store.database,
        database_url: set_flag(state.config.database_url.is_some()),
        database_name: set_flag(state.config.database_name.is_some()),
        connection_status: store.connection_status,
        collections: store.collections,
    })
}
