use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::catalog::CatalogService;
use crate::config::Config;
use crate::store::{DynStore, MongoStore};

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let store = connect_store(&config).await;

    let state = AppState {
        catalog: CatalogService::new(store),
        config: Arc::new(config.clone()),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// A missing or unusable store is a degraded state, not a startup failure:
/// the read path serves empty results and the write paths answer 500 until
/// the store is configured.
async fn connect_store(config: &Config) -> Option<DynStore> {
    let url = match &config.database_url {
        Some(url) => url,
        None => {
            warn!("DATABASE_URL not set; starting without a store");
            return None;
        }
    };
    match MongoStore::connect(url, config.resolved_database_name()).await {
        Ok(store) => Some(Arc::new(store) as DynStore),
        Err(err) => {
            warn!(error = %err, "Could not initialize store client; starting without a store");
            None
        }
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Service info ────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::test_database))
        // ── Catalog ─────────────────────────────────────────────────────────
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route("/api/seed", post(handlers::products::seed_products))
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
