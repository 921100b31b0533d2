use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::params::{require_scope, ScopeQuery};
use crate::errors::AppError;
use crate::generators::generate_transactions;
use crate::models::Transaction;
use crate::AppState;

use super::run_generator;

const ENDPOINT: &str = "transactions";

#[derive(Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total: usize,
    pub contract_address: String,
    pub filter_address: String,
}

/// GET /transactions: recent calls sent by the filter address.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<TransactionsResponse>, AppError> {
    let scope = require_scope(ENDPOINT, ScopeQuery::from_pairs(pairs))?;

    let rng_source = state.rng;
    let filter_address = scope.filter_address.clone();
    let transactions = run_generator(ENDPOINT, "transactions", move || {
        generate_transactions(&mut rng_source.rng(), &filter_address, Utc::now())
    })
    .await?;

    tracing::debug!(
        contract = %scope.contract_address,
        count = transactions.len(),
        "Served mock transactions"
    );

    Ok(Json(TransactionsResponse {
        total: transactions.len(),
        transactions,
        contract_address: scope.contract_address,
        filter_address: scope.filter_address,
    }))
}
