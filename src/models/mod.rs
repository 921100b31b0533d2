pub mod analytics;
pub mod game;
pub mod player;
pub mod token_transfer;
pub mod transaction;

pub use analytics::{AnalyticsSummary, DailyCount, MethodCount};
pub use game::{ActivePlayer, GameMetrics, GameTypeShare, HourlyActivity};
pub use player::{level_for_experience, LeaderboardSet, Player};
pub use token_transfer::{TokenInfo, TokenTransfer, TransferDirection, TOKEN_CATALOG};
pub use transaction::{ContractMethod, Transaction, TxStatus};
