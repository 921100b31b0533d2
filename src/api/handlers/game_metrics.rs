use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::params::{require_scope, ScopeQuery};
use crate::errors::AppError;
use crate::generators::generate_game_metrics;
use crate::models::GameMetrics;
use crate::AppState;

use super::run_generator;

const ENDPOINT: &str = "game-metrics";

#[derive(Serialize)]
pub struct GameMetricsResponse {
    pub metrics: GameMetrics,
    pub contract_address: String,
    pub filter_address: String,
    pub generated_at: DateTime<Utc>,
}

/// GET /game-metrics: gameplay totals, top players and hourly activity.
pub async fn summary(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<GameMetricsResponse>, AppError> {
    let scope = require_scope(ENDPOINT, ScopeQuery::from_pairs(pairs))?;

    let rng_source = state.rng;
    let metrics = run_generator(ENDPOINT, "game metrics", move || {
        Ok(generate_game_metrics(&mut rng_source.rng()))
    })
    .await?;

    Ok(Json(GameMetricsResponse {
        metrics,
        contract_address: scope.contract_address,
        filter_address: scope.filter_address,
        generated_at: Utc::now(),
    }))
}
