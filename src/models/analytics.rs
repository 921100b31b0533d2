use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ContractMethod;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCount {
    pub method: ContractMethod,
    pub count: u32,
}

/// Contract-level summary shown on the analytics tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_transactions: u32,
    pub total_volume: Decimal,
    pub unique_addresses: u32,
    pub average_gas_used: String,
    pub success_rate: f64,
    /// Exactly seven entries, oldest first, ending today.
    pub daily_transactions: Vec<DailyCount>,
    pub top_methods: Vec<MethodCount>,
    pub gas_efficiency: u32,
}
