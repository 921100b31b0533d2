use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::params::{require_scope, ScopeQuery};
use crate::errors::AppError;
use crate::generators::generate_analytics;
use crate::models::AnalyticsSummary;
use crate::AppState;

use super::run_generator;

const ENDPOINT: &str = "analytics";

#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub analytics: AnalyticsSummary,
    pub contract_address: String,
    pub filter_address: String,
    pub generated_at: DateTime<Utc>,
}

/// GET /analytics: contract summary with a seven-day activity series.
pub async fn summary(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let scope = require_scope(ENDPOINT, ScopeQuery::from_pairs(pairs))?;

    let rng_source = state.rng;
    let now = Utc::now();
    let analytics = run_generator(ENDPOINT, "analytics", move || {
        Ok(generate_analytics(&mut rng_source.rng(), now))
    })
    .await?;

    Ok(Json(AnalyticsResponse {
        analytics,
        contract_address: scope.contract_address,
        filter_address: scope.filter_address,
        generated_at: now,
    }))
}
