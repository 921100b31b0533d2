use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::params::{require_scope, ScopeQuery};
use crate::errors::AppError;
use crate::generators::generate_leaderboards;
use crate::models::LeaderboardSet;
use crate::AppState;

use super::run_generator;

const ENDPOINT: &str = "leaderboards";

#[derive(Serialize)]
pub struct LeaderboardsResponse {
    pub leaderboards: LeaderboardSet,
    pub contract_address: String,
    pub filter_address: String,
    pub generated_at: DateTime<Utc>,
}

/// GET /leaderboards: the seven ranked player boards.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LeaderboardsResponse>, AppError> {
    let scope = require_scope(ENDPOINT, ScopeQuery::from_pairs(pairs))?;

    let rng_source = state.rng;
    let now = Utc::now();
    let leaderboards = run_generator(ENDPOINT, "leaderboards", move || {
        Ok(generate_leaderboards(&mut rng_source.rng(), now))
    })
    .await?;

    tracing::debug!(
        contract = %scope.contract_address,
        best_win_rate = leaderboards.best_win_rate.len(),
        "Served mock leaderboards"
    );

    Ok(Json(LeaderboardsResponse {
        leaderboards,
        contract_address: scope.contract_address,
        filter_address: scope.filter_address,
        generated_at: now,
    }))
}
