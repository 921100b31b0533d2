use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::params::{require_scope, ScopeQuery};
use crate::errors::AppError;
use crate::generators::generate_token_transfers;
use crate::models::TokenTransfer;
use crate::AppState;

use super::run_generator;

const ENDPOINT: &str = "token-transfers";

#[derive(Serialize)]
pub struct TokenTransfersResponse {
    pub transfers: Vec<TokenTransfer>,
    pub total: usize,
    pub contract_address: String,
    pub filter_address: String,
}

/// GET /token-transfers: ERC-20 movements into and out of the filter address.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<TokenTransfersResponse>, AppError> {
    let scope = require_scope(ENDPOINT, ScopeQuery::from_pairs(pairs))?;

    let rng_source = state.rng;
    let filter_address = scope.filter_address.clone();
    let transfers = run_generator(ENDPOINT, "token transfers", move || {
        generate_token_transfers(&mut rng_source.rng(), &filter_address, Utc::now())
    })
    .await?;

    tracing::debug!(
        contract = %scope.contract_address,
        count = transfers.len(),
        "Served mock token transfers"
    );

    Ok(Json(TokenTransfersResponse {
        total: transfers.len(),
        transfers,
        contract_address: scope.contract_address,
        filter_address: scope.filter_address,
    }))
}
