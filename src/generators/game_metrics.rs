use rand::Rng;

use super::fields;
use crate::models::{ActivePlayer, GameMetrics, GameTypeShare, HourlyActivity};

pub const TOP_PLAYER_COUNT: usize = 10;
pub const HOURLY_JITTER: u32 = 50;

const TOTAL_GAMES: u64 = 35_420;
const REGISTERED_PLAYERS: u64 = 12_847;
const UNIQUE_WALLETS: u64 = 8_934;
const AVERAGE_GUESSES: f64 = 4.1;
const SUCCESS_RATE: f64 = 94.2;

/// Contract interactions per game, in tenths (3.2).
const INTERACTIONS_PER_GAME_TENTHS: u64 = 32;
/// Share of registered players active on a given day, in percent.
const DAILY_ACTIVE_PCT: u64 = 23;

const GAME_TYPES: [(&str, u32, f64); 5] = [
    ("Daily Challenge", 18_420, 52.1),
    ("Practice Mode", 8_930, 25.3),
    ("Speed Round", 4_670, 13.2),
    ("Hard Mode", 2_890, 8.2),
    ("Custom Words", 420, 1.2),
];

/// Baseline games per hour before jitter. Evenings are the busiest.
pub fn hourly_baseline(hour: u32) -> u32 {
    match hour {
        6..=11 => 80,
        12..=17 => 120,
        18..=23 => 200,
        _ => 50,
    }
}

pub fn generate_game_metrics<R: Rng>(rng: &mut R) -> GameMetrics {
    let mut top_players: Vec<ActivePlayer> = (0..TOP_PLAYER_COUNT)
        .map(|_| ActivePlayer {
            address: fields::address(rng),
            games_played: rng.gen_range(100..600),
            win_rate: rng.gen_range(60.0..100.0),
        })
        .collect();
    top_players.sort_by(|a, b| b.games_played.cmp(&a.games_played));

    let hourly_activity: Vec<HourlyActivity> = (0..24)
        .map(|hour| HourlyActivity {
            hour,
            games: hourly_baseline(hour) + rng.gen_range(0..HOURLY_JITTER),
        })
        .collect();

    let game_type_distribution: Vec<GameTypeShare> = GAME_TYPES
        .iter()
        .map(|&(name, count, percentage)| GameTypeShare {
            game_type: name.to_string(),
            count,
            percentage,
        })
        .collect();

    GameMetrics {
        total_games_played: TOTAL_GAMES,
        total_contract_interactions: TOTAL_GAMES * INTERACTIONS_PER_GAME_TENTHS / 10,
        unique_wallets_interacted: UNIQUE_WALLETS,
        plays_per_player: TOTAL_GAMES as f64 / REGISTERED_PLAYERS as f64,
        registered_players: REGISTERED_PLAYERS,
        daily_active_users: REGISTERED_PLAYERS * DAILY_ACTIVE_PCT / 100,
        weekly_growth: rng.gen_range(5.0..15.0),
        top_players,
        game_type_distribution,
        hourly_activity,
        average_guesses: AVERAGE_GUESSES,
        success_rate: SUCCESS_RATE,
    }
}
