//! TrackerError: validation and storage failures.

use crate::models::game::{GameId, Team};
use crate::models::player::PlayerId;

/// Errors that can occur while recording games or talking to the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TrackerError {
    /// Player name is blank after trimming.
    EmptyPlayerName,
    /// A team has no player in either slot.
    EmptyTeam(Team),
    /// A score entry is missing or not a non-negative integer.
    InvalidScore(Team),
    /// Recorded winner disagrees with the scores.
    WinnerMismatch { expected: Team, recorded: Team },
    /// The same player occupies two slots of one game.
    DuplicatePlayer(PlayerId),
    /// Player is already standing on another court position.
    PlayerAlreadyOnCourt(PlayerId),
    /// Player id is not in the directory.
    PlayerNotFound(PlayerId),
    /// Game id is not in the store.
    GameNotFound(GameId),
    /// The backing store failed (lock poisoned, backend down).
    Storage(String),
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::EmptyPlayerName => write!(f, "Please enter a player name"),
            TrackerError::EmptyTeam(team) => {
                write!(f, "Please add at least one player to {}", team.label())
            }
            TrackerError::InvalidScore(team) => {
                write!(f, "Please enter a valid score for {}", team.label())
            }
            TrackerError::WinnerMismatch { expected, recorded } => write!(
                f,
                "Winner {} does not match the scores ({} won)",
                recorded.label(),
                expected.label()
            ),
            TrackerError::DuplicatePlayer(_) => {
                write!(f, "A player cannot appear twice in the same game")
            }
            TrackerError::PlayerAlreadyOnCourt(_) => write!(f, "Player is already on the court"),
            TrackerError::PlayerNotFound(_) => write!(f, "Player not found"),
            TrackerError::GameNotFound(_) => write!(f, "Game not found"),
            TrackerError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}
