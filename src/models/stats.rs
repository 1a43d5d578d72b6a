//! PlayerStat: derived per-player statistics (never persisted).

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Aggregated record for one player over a snapshot of games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player: Player,
    pub games_played: u32,
    pub wins: u32,
    /// Always `games_played - wins`.
    pub losses: u32,
    /// Sum of the player's team score over all their games.
    pub total_points: u32,
    /// Percentage, one decimal.
    pub win_rate: f64,
    /// Points per game, one decimal.
    pub avg_points: f64,
}
