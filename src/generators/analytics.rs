use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::fields;
use crate::models::{AnalyticsSummary, ContractMethod, DailyCount, MethodCount};

pub const DAILY_WINDOW_DAYS: i64 = 7;

const TOTAL_TRANSACTIONS: u32 = 3483;
const UNIQUE_ADDRESSES: u32 = 1247;
const SUCCESS_RATE: f64 = 98.7;

const TOP_METHODS: [(ContractMethod, u32); 5] = [
    (ContractMethod::Transfer, 1247),
    (ContractMethod::Approve, 892),
    (ContractMethod::Swap, 634),
    (ContractMethod::Mint, 423),
    (ContractMethod::Burn, 287),
];

pub fn generate_analytics<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> AnalyticsSummary {
    let daily_transactions: Vec<DailyCount> = (0..DAILY_WINDOW_DAYS)
        .rev()
        .map(|days_ago| DailyCount {
            date: (now - Duration::days(days_ago)).date_naive(),
            count: rng.gen_range(100..600),
        })
        .collect();

    let top_methods: Vec<MethodCount> = TOP_METHODS
        .iter()
        .map(|&(method, count)| MethodCount { method, count })
        .collect();

    AnalyticsSummary {
        total_transactions: TOTAL_TRANSACTIONS,
        total_volume: fields::decimal(rng, 50_000_000, 150_000_000, 4),
        unique_addresses: UNIQUE_ADDRESSES,
        average_gas_used: fields::int_string(rng, 21_000, 71_001),
        success_rate: SUCCESS_RATE,
        daily_transactions,
        top_methods,
        gas_efficiency: rng.gen_range(80..100),
    }
}
