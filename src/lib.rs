//! Lift pass pricing service.
//!
//! Quotes ski lift pass prices over HTTP and lets administrators replace the
//! base price of each pass type.

pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cache::AppCache;
use crate::pricing::PriceStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: PriceStore,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(store: PriceStore) -> Self {
        Self {
            store,
            cache: AppCache::new(),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
