//! Data structures for the tracker: players, games, court, derived stats.

mod court;
mod error;
mod game;
mod player;
mod stats;

pub use court::{Court, CourtId, CourtPosition, CourtPositions, PendingScores};
pub use error::TrackerError;
pub use game::{Game, GameId, GameRecord, NewGame, Team, TeamEntry, TeamSlots};
pub use player::{NewPlayer, Player, PlayerId, StatKey};
pub use stats::PlayerStat;
