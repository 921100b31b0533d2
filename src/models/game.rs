use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlayer {
    pub address: String,
    pub games_played: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTypeShare {
    #[serde(rename = "type")]
    pub game_type: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyActivity {
    pub hour: u32,
    pub games: u32,
}

/// Gameplay statistics for the word-guessing contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetrics {
    pub total_games_played: u64,
    pub total_contract_interactions: u64,
    pub unique_wallets_interacted: u64,
    pub plays_per_player: f64,
    pub registered_players: u64,
    pub daily_active_users: u64,
    pub weekly_growth: f64,
    /// Sorted by games played, not ranked.
    pub top_players: Vec<ActivePlayer>,
    pub game_type_distribution: Vec<GameTypeShare>,
    /// One entry per hour of day, 0..=23.
    pub hourly_activity: Vec<HourlyActivity>,
    pub average_guesses: f64,
    pub success_rate: f64,
}
