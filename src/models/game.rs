//! Game records, resolved games, and Team for 2v2 / 1v1 play.

use crate::models::error::TrackerError;
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game, assigned by the store on insert.
pub type GameId = Uuid;

/// One side of the net.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Team {
    #[default]
    #[serde(rename = "team1")]
    One,
    #[serde(rename = "team2")]
    Two,
}

impl Team {
    /// Winner of a finished game. Team 1 needs a strictly greater score, so a tie goes to team 2.
    pub fn from_scores(team_1_score: u32, team_2_score: u32) -> Self {
        if team_1_score > team_2_score {
            Team::One
        } else {
            Team::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Team::One => "Team 1",
            Team::Two => "Team 2",
        }
    }
}

/// Stored shape of one team: up to two player ids and the final score.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub player_1: Option<PlayerId>,
    pub player_2: Option<PlayerId>,
    pub score: u32,
}

impl TeamEntry {
    pub fn new(player_1: Option<PlayerId>, player_2: Option<PlayerId>, score: u32) -> Self {
        Self {
            player_1,
            player_2,
            score,
        }
    }

    /// Occupied slots, in slot order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.player_1.iter().chain(self.player_2.iter()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.player_1.is_none() && self.player_2.is_none()
    }
}

/// Insert request for the game store. The winner is derived from the scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    pub team_1: TeamEntry,
    pub team_2: TeamEntry,
    pub winner: Team,
    /// Defaults to the creation date when None.
    pub played_at: Option<NaiveDate>,
}

impl NewGame {
    pub fn new(team_1: TeamEntry, team_2: TeamEntry) -> Self {
        let winner = Team::from_scores(team_1.score, team_2.score);
        Self {
            team_1,
            team_2,
            winner,
            played_at: None,
        }
    }

    pub fn team(&self, team: Team) -> &TeamEntry {
        match team {
            Team::One => &self.team_1,
            Team::Two => &self.team_2,
        }
    }

    /// Checked before persistence: each team needs a player, the winner must follow from
    /// the scores, and nobody plays twice.
    pub fn validate(&self) -> Result<(), TrackerError> {
        for team in [Team::One, Team::Two] {
            if self.team(team).is_empty() {
                return Err(TrackerError::EmptyTeam(team));
            }
        }
        let expected = Team::from_scores(self.team_1.score, self.team_2.score);
        if self.winner != expected {
            return Err(TrackerError::WinnerMismatch {
                expected,
                recorded: self.winner,
            });
        }
        let mut seen: Vec<PlayerId> = Vec::with_capacity(4);
        for id in self.team_1.player_ids().chain(self.team_2.player_ids()) {
            if seen.contains(&id) {
                return Err(TrackerError::DuplicatePlayer(id));
            }
            seen.push(id);
        }
        Ok(())
    }
}

/// A persisted game row: player references are ids.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub team_1: TeamEntry,
    pub team_2: TeamEntry,
    pub winner: Team,
    pub played_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// One team of a resolved game.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSlots {
    pub player_1: Option<Player>,
    pub player_2: Option<Player>,
    pub score: u32,
}

impl TeamSlots {
    pub fn new(player_1: Option<Player>, player_2: Option<Player>, score: u32) -> Self {
        Self {
            player_1,
            player_2,
            score,
        }
    }

    /// Occupied slots, in slot order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.player_1.iter().chain(self.player_2.iter())
    }

    /// Player names joined for display, e.g. "Alice & Bob".
    pub fn display_name(&self) -> String {
        self.players()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// A game with its players resolved, as consumed by the stats aggregator.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub team_1: TeamSlots,
    pub team_2: TeamSlots,
    pub winner: Team,
    pub played_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Build an unsaved game (fresh id, current time); mostly useful for tests and previews.
    pub fn new(team_1: TeamSlots, team_2: TeamSlots) -> Self {
        let now = Utc::now();
        let winner = Team::from_scores(team_1.score, team_2.score);
        Self {
            id: Uuid::new_v4(),
            team_1,
            team_2,
            winner,
            played_at: now.date_naive(),
            created_at: now,
        }
    }

    pub fn team(&self, team: Team) -> &TeamSlots {
        match team {
            Team::One => &self.team_1,
            Team::Two => &self.team_2,
        }
    }
}
