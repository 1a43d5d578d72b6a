//! Pickleball tracker: library with models, stats aggregation, and the store seam.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    compute_stats, find_game, hydrate_games, leaderboard, load_games, rank_order, record_game,
    round_to_tenth, search_players, share_text,
};
pub use models::{
    Court, CourtId, CourtPosition, CourtPositions, Game, GameId, GameRecord, NewGame, NewPlayer,
    PendingScores, Player, PlayerId, PlayerStat, StatKey, Team, TeamEntry, TeamSlots,
    TrackerError,
};
pub use store::{GameStore, MemoryStore, PlayerDirectory};
