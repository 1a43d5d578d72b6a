//! Persistence seams: the player directory and the game store.
//!
//! The tracker only needs insert and list-all from its backend. [`MemoryStore`] keeps
//! everything in process; another backend implements the same two traits.

mod memory;

pub use memory::MemoryStore;

use crate::models::{GameRecord, NewGame, NewPlayer, Player, TrackerError};

/// Roster of known players.
pub trait PlayerDirectory {
    /// Store a player, assigning id and creation time.
    fn insert_player(&self, player: NewPlayer) -> Result<Player, TrackerError>;

    /// All players, oldest first.
    fn list_players(&self) -> Result<Vec<Player>, TrackerError>;
}

/// Append-only history of completed games.
pub trait GameStore {
    /// Validate and store a game, assigning id, creation time, and the played date if unset.
    fn insert_game(&self, game: NewGame) -> Result<GameRecord, TrackerError>;

    /// All games, newest first.
    fn list_games(&self) -> Result<Vec<GameRecord>, TrackerError>;
}
