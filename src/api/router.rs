use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Mock query endpoints; mounted at the root and under the path the dashboard fetches
    let dune = Router::new()
        .route("/analytics", get(handlers::analytics::summary))
        .route("/game-metrics", get(handlers::game_metrics::summary))
        .route("/leaderboards", get(handlers::leaderboards::list))
        .route("/token-transfers", get(handlers::token_transfers::list))
        .route("/transactions", get(handlers::transactions::list));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .merge(dune.clone())
        .nest("/api/dune", dune)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
