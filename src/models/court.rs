//! Court: the four positions on court and the pending score entry for the next game.

use crate::models::error::TrackerError;
use crate::models::game::{NewGame, Team, TeamEntry};
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a court (one per client).
pub type CourtId = Uuid;

/// One of the four service-court positions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtPosition {
    Team1Left,
    Team1Right,
    Team2Left,
    Team2Right,
}

impl CourtPosition {
    pub const ALL: [CourtPosition; 4] = [
        CourtPosition::Team1Left,
        CourtPosition::Team1Right,
        CourtPosition::Team2Left,
        CourtPosition::Team2Right,
    ];

    pub fn team(self) -> Team {
        match self {
            CourtPosition::Team1Left | CourtPosition::Team1Right => Team::One,
            CourtPosition::Team2Left | CourtPosition::Team2Right => Team::Two,
        }
    }
}

/// Who stands where. Empty positions are None.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CourtPositions {
    pub team_1_left: Option<PlayerId>,
    pub team_1_right: Option<PlayerId>,
    pub team_2_left: Option<PlayerId>,
    pub team_2_right: Option<PlayerId>,
}

impl CourtPositions {
    pub fn get(&self, position: CourtPosition) -> Option<PlayerId> {
        match position {
            CourtPosition::Team1Left => self.team_1_left,
            CourtPosition::Team1Right => self.team_1_right,
            CourtPosition::Team2Left => self.team_2_left,
            CourtPosition::Team2Right => self.team_2_right,
        }
    }

    fn slot_mut(&mut self, position: CourtPosition) -> &mut Option<PlayerId> {
        match position {
            CourtPosition::Team1Left => &mut self.team_1_left,
            CourtPosition::Team1Right => &mut self.team_1_right,
            CourtPosition::Team2Left => &mut self.team_2_left,
            CourtPosition::Team2Right => &mut self.team_2_right,
        }
    }

    /// Position currently held by the player, if any.
    pub fn position_of(&self, player_id: PlayerId) -> Option<CourtPosition> {
        CourtPosition::ALL
            .into_iter()
            .find(|&pos| self.get(pos) == Some(player_id))
    }
}

/// Raw score entries as typed by the user; parsed when the game is saved.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingScores {
    pub team_1: String,
    pub team_2: String,
}

/// Court state for one client: positions plus pending scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub positions: CourtPositions,
    pub scores: PendingScores,
}

impl Default for Court {
    fn default() -> Self {
        Self::new()
    }
}

impl Court {
    /// Create an empty court.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            positions: CourtPositions::default(),
            scores: PendingScores::default(),
        }
    }

    /// Put a player on a position, replacing whoever stood there.
    /// A player already standing elsewhere must be moved, not assigned twice.
    pub fn assign(
        &mut self,
        position: CourtPosition,
        player_id: PlayerId,
    ) -> Result<(), TrackerError> {
        match self.positions.position_of(player_id) {
            Some(current) if current == position => return Ok(()),
            Some(_) => return Err(TrackerError::PlayerAlreadyOnCourt(player_id)),
            None => {}
        }
        *self.positions.slot_mut(position) = Some(player_id);
        Ok(())
    }

    /// Empty a position. Returns the player that stood there.
    pub fn vacate(&mut self, position: CourtPosition) -> Option<PlayerId> {
        self.positions.slot_mut(position).take()
    }

    /// Move the player at `from` to `to`, swapping with the occupant of `to` (if any).
    /// Moving from an empty position does nothing.
    pub fn move_player(&mut self, from: CourtPosition, to: CourtPosition) {
        if from == to {
            return;
        }
        let Some(moving) = self.positions.get(from) else {
            return;
        };
        let target = self.positions.get(to);
        *self.positions.slot_mut(from) = target;
        *self.positions.slot_mut(to) = Some(moving);
    }

    pub fn set_score(&mut self, team: Team, raw: impl Into<String>) {
        let raw = raw.into();
        match team {
            Team::One => self.scores.team_1 = raw,
            Team::Two => self.scores.team_2 = raw,
        }
    }

    /// Empty every position and both score entries.
    pub fn clear(&mut self) {
        self.positions = CourtPositions::default();
        self.reset_scores();
    }

    /// Clear score entries but keep players on court (after a game is saved).
    pub fn reset_scores(&mut self) {
        self.scores = PendingScores::default();
    }

    /// Players of one team, left position first.
    pub fn team_players(&self, team: Team) -> Vec<PlayerId> {
        let (left, right) = match team {
            Team::One => (CourtPosition::Team1Left, CourtPosition::Team1Right),
            Team::Two => (CourtPosition::Team2Left, CourtPosition::Team2Right),
        };
        [left, right]
            .into_iter()
            .filter_map(|pos| self.positions.get(pos))
            .collect()
    }

    /// Build the game to record from the current court.
    ///
    /// Requires at least one player per team and a non-negative integer score for both.
    pub fn to_new_game(&self) -> Result<NewGame, TrackerError> {
        for team in [Team::One, Team::Two] {
            if self.team_players(team).is_empty() {
                return Err(TrackerError::EmptyTeam(team));
            }
        }
        let team_1_score =
            parse_score(&self.scores.team_1).ok_or(TrackerError::InvalidScore(Team::One))?;
        let team_2_score =
            parse_score(&self.scores.team_2).ok_or(TrackerError::InvalidScore(Team::Two))?;

        let p = &self.positions;
        let game = NewGame::new(
            TeamEntry::new(p.team_1_left, p.team_1_right, team_1_score),
            TeamEntry::new(p.team_2_left, p.team_2_right, team_2_score),
        );
        game.validate()?;
        Ok(game)
    }
}

fn parse_score(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
