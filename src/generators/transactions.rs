use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::fields::{self, Window};
use super::GenerationError;
use crate::models::{ContractMethod, Transaction, TxStatus};

pub const TRANSACTION_COUNT: usize = 20;

const FAILURE_PROBABILITY: f64 = 0.1;
const BASE_BLOCK: u64 = 18_000_000;

/// Recent contract calls sent by `filter_address`, newest first.
pub fn generate_transactions<R: Rng>(
    rng: &mut R,
    filter_address: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Transaction>, GenerationError> {
    let mut transactions = Vec::with_capacity(TRANSACTION_COUNT);

    for _ in 0..TRANSACTION_COUNT {
        let method = *ContractMethod::ALL
            .choose(rng)
            .ok_or(GenerationError::EmptyCatalog("contract methods"))?;

        let status = if rng.gen_bool(FAILURE_PROBABILITY) {
            TxStatus::Failed
        } else {
            TxStatus::Success
        };

        transactions.push(Transaction {
            hash: fields::tx_hash(rng),
            from_address: filter_address.to_string(),
            to_address: fields::address(rng),
            value: fields::decimal(rng, 0, 10_000_000, 6),
            gas_used: fields::int_string(rng, 20_000, 70_000),
            gas_price: fields::int_string(rng, 20, 120),
            timestamp: fields::recent_timestamp(rng, now, Window::LastWeek),
            status,
            method,
            block_number: fields::int_string(rng, BASE_BLOCK, BASE_BLOCK + 100_000),
        });
    }

    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    #[test]
    fn test_all_sent_by_filter_address() {
        let mut rng = StdRng::seed_from_u64(7);
        let txs = generate_transactions(&mut rng, "0xdead", Utc::now()).unwrap();
        assert_eq!(txs.len(), TRANSACTION_COUNT);
        assert!(txs.iter().all(|t| t.from_address == "0xdead"));
    }

    #[test]
    fn test_newest_first_within_a_week() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(8);
        let txs = generate_transactions(&mut rng, "0xdead", now).unwrap();
        for pair in txs.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
        assert!(txs.iter().all(|t| now - t.timestamp < Duration::days(7)));
    }

    #[test]
    fn test_field_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        let txs = generate_transactions(&mut rng, "0xdead", Utc::now()).unwrap();
        for tx in &txs {
            assert!(tx.value >= Decimal::ZERO && tx.value < Decimal::from(10));
            assert_eq!(tx.value.scale(), 6);
            let gas: u64 = tx.gas_used.parse().unwrap();
            assert!((20_000..70_000).contains(&gas));
            let price: u64 = tx.gas_price.parse().unwrap();
            assert!((20..120).contains(&price));
            let block: u64 = tx.block_number.parse().unwrap();
            assert!((18_000_000..18_100_000).contains(&block));
            assert_eq!(tx.hash.len(), 66);
            assert_eq!(tx.to_address.len(), 42);
        }
    }

    #[test]
    fn test_failure_rate_is_roughly_ten_percent() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut failed = 0;
        let mut total = 0;
        for _ in 0..100 {
            let txs = generate_transactions(&mut rng, "0xdead", Utc::now()).unwrap();
            total += txs.len();
            failed += txs.iter().filter(|t| t.status == TxStatus::Failed).count();
        }
        let rate = failed as f64 / total as f64;
        assert!(rate > 0.05 && rate < 0.15, "failure rate {rate}");
    }
}
