use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub address: String,
    pub rank: u32,
    pub previous_rank: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub games_played: u32,
    pub games_won: u32,
    pub win_rate: f64,
    pub total_earnings: Decimal,
    /// Seconds.
    pub average_game_time: u32,
    pub streak: u32,
    pub last_active: DateTime<Utc>,
    pub level: u32,
    pub experience: u32,
    pub achievements: u32,
}

impl Player {
    /// Positive when the player climbed since the previous snapshot.
    pub fn rank_improvement(&self) -> i32 {
        self.previous_rank - self.rank as i32
    }
}

/// Level derived from experience points: one level per 1000 XP, starting at 1.
pub fn level_for_experience(experience: u32) -> u32 {
    experience / 1000 + 1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSet {
    pub top_players: Vec<Player>,
    pub top_earners: Vec<Player>,
    pub most_active: Vec<Player>,
    pub best_win_rate: Vec<Player>,
    pub longest_streaks: Vec<Player>,
    pub recently_active: Vec<Player>,
    pub rising: Vec<Player>,
    pub last_updated: DateTime<Utc>,
}

impl LeaderboardSet {
    /// All categories in display order, keyed by their JSON name.
    pub fn categories(&self) -> [(&'static str, &[Player]); 7] {
        [
            ("topPlayers", self.top_players.as_slice()),
            ("topEarners", self.top_earners.as_slice()),
            ("mostActive", self.most_active.as_slice()),
            ("bestWinRate", self.best_win_rate.as_slice()),
            ("longestStreaks", self.longest_streaks.as_slice()),
            ("recentlyActive", self.recently_active.as_slice()),
            ("rising", self.rising.as_slice()),
        ]
    }
}
