//! Tracker business logic: stats aggregation, history, record/read workflows.

mod history;
mod stats;
mod tracker;

pub use history::{hydrate_games, share_text};
pub use stats::{compute_stats, rank_order, round_to_tenth};
pub use tracker::{find_game, leaderboard, load_games, record_game, search_players};
