//! Player, NewPlayer, and the identity key used to bucket statistics.

use crate::models::error::TrackerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player, assigned by the directory on insert.
pub type PlayerId = Uuid;

/// Key under which a player's statistics are accumulated.
///
/// Persisted players are keyed by id. Transient players fall back to their name, so two
/// unsaved players sharing a name end up in the same bucket.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StatKey {
    Id(PlayerId),
    Name(String),
}

/// A player known to the directory (or a transient, unsaved one).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// None for transient players that were never stored.
    pub id: Option<PlayerId>,
    pub name: String,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Player {
    /// Create a transient player with the given name (no id, no email).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            created_at: None,
        }
    }

    /// Builder-style: attach an email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn stat_key(&self) -> StatKey {
        match self.id {
            Some(id) => StatKey::Id(id),
            None => StatKey::Name(self.name.clone()),
        }
    }

    /// Case-insensitive substring match on name or email. An empty query matches everyone.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .email
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&query))
    }
}

/// Insert request for the player directory.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }

    /// Trim both fields; the name is required, a blank email becomes None.
    pub fn validated(self) -> Result<Self, TrackerError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(TrackerError::EmptyPlayerName);
        }
        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Ok(Self { name, email })
    }
}
