use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::catalog::{SeedOutcome, DEFAULT_LIST_LIMIT};
use crate::error::AppResult;
use crate::models::{self, Product, ProductInput};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let products = state.catalog.list(params.category.as_deref(), limit).await?;
    info!(
        count = products.len(),
        category = params.category.as_deref().unwrap_or("*"),
        "Listed products"
    );
    Ok(Json(products))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductInput>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let product = models::validate(payload)?;
    let id = state.catalog.create(&product).await?;
    info!(%id, title = %product.title, "Created product");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

// ── Seed ──────────────────────────────────────────────────────────────────────

pub async fn seed_products(State(state): State<AppState>) -> AppResult<Json<SeedOutcome>> {
    let outcome = state.catalog.seed().await?;
    Ok(Json(outcome))
}
