//! Mock aggregators standing in for indexed on-chain query results.
//!
//! Every generator takes its random source and the current time explicitly so
//! callers (and tests) decide how values are seeded.

pub mod analytics;
pub mod fields;
pub mod game_metrics;
pub mod leaderboards;
pub mod token_transfers;
pub mod transactions;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use analytics::generate_analytics;
pub use game_metrics::generate_game_metrics;
pub use leaderboards::generate_leaderboards;
pub use token_transfers::generate_token_transfers;
pub use transactions::generate_transactions;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("catalog is empty: {0}")]
    EmptyCatalog(&'static str),

    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

/// Where per-request randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngSource {
    /// Fresh OS-seeded generator for every request.
    Entropy,
    /// Same seed for every request; payloads differ only in clock-derived fields.
    Seeded(u64),
}

impl RngSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => RngSource::Seeded(s),
            None => RngSource::Entropy,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self {
            RngSource::Entropy => StdRng::from_entropy(),
            RngSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}
