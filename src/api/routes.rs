//! API Route Configuration

use axum::{http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Read-only API: GET from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let request_timeout = state.config.request_timeout;
    let max_concurrent = state.config.max_concurrent_requests;

    let wallet_routes = Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Wallet queries
        .route("/wallets", get(handlers::list_wallets))
        .route("/wallets/top", get(handlers::top_wallets))
        .route("/wallet/:wallet_id", get(handlers::wallet_details))
        .route("/wallet/:wallet_id/explain", get(handlers::explain_wallet))
        .route("/summary", get(handlers::summary));

    // Build full router
    Router::new()
        .route("/", get(handlers::root))
        .nest("/v1", wallet_routes.clone())
        // Also expose at root for existing clients
        .merge(wallet_routes)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(max_concurrent))
        .layer(middleware::from_fn(logging_middleware))
}
