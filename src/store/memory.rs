//! In-process store: players and games in RwLock-guarded vectors.

use crate::models::{GameRecord, NewGame, NewPlayer, Player, TrackerError};
use crate::store::{GameStore, PlayerDirectory};
use chrono::Utc;
use std::sync::RwLock;
use uuid::Uuid;

/// Both collaborators in memory. Reads see every insert that returned Ok.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: RwLock<Vec<Player>>,
    games: RwLock<Vec<GameRecord>>,
}

fn lock_error<T>(_: T) -> TrackerError {
    TrackerError::Storage("lock error".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerDirectory for MemoryStore {
    fn insert_player(&self, player: NewPlayer) -> Result<Player, TrackerError> {
        let NewPlayer { name, email } = player.validated()?;
        let player = Player {
            id: Some(Uuid::new_v4()),
            name,
            email,
            created_at: Some(Utc::now()),
        };
        self.players.write().map_err(lock_error)?.push(player.clone());
        log::debug!("Stored player {} ({:?})", player.name, player.id);
        Ok(player)
    }

    fn list_players(&self) -> Result<Vec<Player>, TrackerError> {
        let mut players = self.players.read().map_err(lock_error)?.clone();
        players.sort_by_key(|p| p.created_at);
        Ok(players)
    }
}

impl GameStore for MemoryStore {
    fn insert_game(&self, game: NewGame) -> Result<GameRecord, TrackerError> {
        game.validate()?;
        let created_at = Utc::now();
        let record = GameRecord {
            id: Uuid::new_v4(),
            team_1: game.team_1,
            team_2: game.team_2,
            winner: game.winner,
            played_at: game.played_at.unwrap_or_else(|| created_at.date_naive()),
            created_at,
        };
        self.games.write().map_err(lock_error)?.push(record.clone());
        log::debug!("Stored game {}", record.id);
        Ok(record)
    }

    fn list_games(&self) -> Result<Vec<GameRecord>, TrackerError> {
        // Reverse first so equal timestamps list the later insert first.
        let mut games: Vec<GameRecord> = self
            .games
            .read()
            .map_err(lock_error)?
            .iter()
            .rev()
            .cloned()
            .collect();
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(games)
    }
}
