//! Player statistics: aggregate a snapshot of games into a ranked leaderboard.

use crate::models::{Game, Player, PlayerStat, StatKey, Team};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Running totals for one identity key while walking the games.
struct Tally {
    player: Player,
    wins: u32,
    losses: u32,
    total_points: u32,
    games_played: u32,
}

impl Tally {
    fn new(player: &Player) -> Self {
        Self {
            player: player.clone(),
            wins: 0,
            losses: 0,
            total_points: 0,
            games_played: 0,
        }
    }

    fn record(&mut self, score: u32, won: bool) {
        self.games_played += 1;
        self.total_points += score;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    fn into_stat(self) -> PlayerStat {
        let (win_rate, avg_points) = if self.games_played > 0 {
            let games = f64::from(self.games_played);
            (
                round_to_tenth(f64::from(self.wins) / games * 100.0),
                round_to_tenth(f64::from(self.total_points) / games),
            )
        } else {
            (0.0, 0.0)
        };
        PlayerStat {
            player: self.player,
            games_played: self.games_played,
            wins: self.wins,
            losses: self.losses,
            total_points: self.total_points,
            win_rate,
            avg_points,
        }
    }
}

/// Compute per-player stats from a snapshot of games and rank them.
///
/// Every occupied slot charges its player one game, the team's score, and a win or a loss.
/// Players are bucketed by [`Player::stat_key`]. Totals do not depend on the order of `games`,
/// and neither does the ranking: see [`rank_order`].
pub fn compute_stats(games: &[Game]) -> Vec<PlayerStat> {
    let mut tallies: HashMap<StatKey, Tally> = HashMap::new();

    for game in games {
        for team in [Team::One, Team::Two] {
            let slots = game.team(team);
            let won = game.winner == team;
            for player in slots.players() {
                tallies
                    .entry(player.stat_key())
                    .or_insert_with(|| Tally::new(player))
                    .record(slots.score, won);
            }
        }
    }

    let mut stats: Vec<PlayerStat> = tallies.into_values().map(Tally::into_stat).collect();
    stats.sort_by(rank_order);
    stats
}

/// Leaderboard order: wins desc, then win rate desc, then name asc, then identity key.
///
/// Win rate is compared after rounding, so 66.66% and 66.67% count as equal.
/// The identity key makes this a total order even when names collide.
pub fn rank_order(a: &PlayerStat, b: &PlayerStat) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.win_rate.total_cmp(&a.win_rate))
        .then_with(|| a.player.name.cmp(&b.player.name))
        .then_with(|| a.player.stat_key().cmp(&b.player.stat_key()))
}

/// Round to one decimal place, halves away from zero (6.25 -> 6.3, 0.125 -> 0.1).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
