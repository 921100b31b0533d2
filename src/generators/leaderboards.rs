use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use rand::Rng;

use super::fields::{self, Window};
use crate::models::{level_for_experience, LeaderboardSet, Player};

/// Players generated per category before sorting.
pub const COHORT_SIZE: u32 = 20;
/// Rows kept per category after sorting.
pub const DISPLAY_LIMIT: usize = 15;
/// Minimum games before a player qualifies for the win-rate board.
pub const MIN_GAMES_FOR_WIN_RATE: u32 = 10;

/// Builds all seven boards. Each board draws its own cohort, so the same rank in
/// two boards does not refer to the same player.
pub fn generate_leaderboards<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> LeaderboardSet {
    let mut top_players = cohort(rng, now);
    top_players.sort_by(|a, b| b.games_won.cmp(&a.games_won));

    let mut top_earners = cohort(rng, now);
    top_earners.sort_by(|a, b| b.total_earnings.cmp(&a.total_earnings));

    let mut most_active = cohort(rng, now);
    most_active.sort_by(|a, b| b.games_played.cmp(&a.games_played));

    let mut best_win_rate: Vec<Player> = cohort(rng, now)
        .into_iter()
        .filter(|p| p.games_played >= MIN_GAMES_FOR_WIN_RATE)
        .collect();
    best_win_rate.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    let mut longest_streaks = cohort(rng, now);
    for player in &mut longest_streaks {
        player.streak = rng.gen_range(1..=50);
    }
    longest_streaks.sort_by(|a, b| b.streak.cmp(&a.streak));

    let mut recently_active = cohort(rng, now);
    for player in &mut recently_active {
        player.last_active = fields::recent_timestamp(rng, now, Window::LastHour);
    }
    recently_active.sort_by(|a, b| b.last_active.cmp(&a.last_active));

    LeaderboardSet {
        top_players: rank_and_truncate(top_players),
        top_earners: rank_and_truncate(top_earners),
        most_active: rank_and_truncate(most_active),
        best_win_rate: rank_and_truncate(best_win_rate),
        longest_streaks: rank_and_truncate(longest_streaks),
        recently_active: rank_and_truncate(recently_active),
        rising: rising(rng, now),
        last_updated: now,
    }
}

/// Players who climbed furthest since the previous snapshot.
///
/// Each player starts 10..60 places below their generated rank. After sorting by
/// that improvement the board is re-ranked and `previous_rank` shifted along with
/// it, so the improvement each row shows is unchanged.
fn rising<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<Player> {
    let mut players: Vec<Player> = (1..=COHORT_SIZE)
        .map(|rank| {
            let previous_rank = rank as i32 + rng.gen_range(10..60);
            generate_player(rng, rank, Some(previous_rank), now)
        })
        .collect();
    players.sort_by_key(|p| Reverse(p.rank_improvement()));

    for (index, player) in players.iter_mut().enumerate() {
        let improvement = player.rank_improvement();
        player.rank = index as u32 + 1;
        player.previous_rank = player.rank as i32 + improvement;
    }
    players.truncate(DISPLAY_LIMIT);
    players
}

fn cohort<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<Player> {
    (1..=COHORT_SIZE)
        .map(|rank| generate_player(rng, rank, None, now))
        .collect()
}

/// Assigns ranks 1..N in list order and keeps the display window.
fn rank_and_truncate(mut players: Vec<Player>) -> Vec<Player> {
    for (index, player) in players.iter_mut().enumerate() {
        player.rank = index as u32 + 1;
    }
    players.truncate(DISPLAY_LIMIT);
    players
}

/// A synthetic player at `rank`.
///
/// Without an explicit `previous_rank` the player is placed within five ranks of
/// where they are now, in either direction. That can be below 1 for the top ranks.
pub fn generate_player<R: Rng>(
    rng: &mut R,
    rank: u32,
    previous_rank: Option<i32>,
    now: DateTime<Utc>,
) -> Player {
    let games_played: u32 = rng.gen_range(50..1050);
    let won_fraction: f64 = rng.gen_range(0.4..0.8);
    let games_won = (games_played as f64 * won_fraction).floor() as u32;
    let experience: u32 = rng.gen_range(1000..51_000);

    let previous_rank = previous_rank.unwrap_or_else(|| rank as i32 + rng.gen_range(-5..5));
    let display_name = rng.gen_bool(0.3).then(|| format!("Player{rank}"));

    Player {
        address: fields::address(rng),
        rank,
        previous_rank,
        display_name,
        games_played,
        games_won,
        win_rate: games_won as f64 / games_played as f64 * 100.0,
        total_earnings: fields::decimal(rng, 100_000, 1_100_000, 4),
        average_game_time: rng.gen_range(120..420),
        streak: rng.gen_range(0..20),
        last_active: fields::recent_timestamp(rng, now, Window::LastDay),
        level: level_for_experience(experience),
        experience,
        achievements: rng.gen_range(5..55),
    }
}
