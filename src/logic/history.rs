//! Game history: resolve stored rows against the directory, and format shareable results.

use crate::models::{Game, GameRecord, Player, PlayerId, Team, TeamEntry, TeamSlots};
use std::collections::HashMap;

/// Turn stored game rows into games with players attached.
///
/// Ids that are not in `players` become empty slots. Order of `records` is kept.
pub fn hydrate_games(records: &[GameRecord], players: &[Player]) -> Vec<Game> {
    let by_id: HashMap<PlayerId, &Player> = players
        .iter()
        .filter_map(|p| p.id.map(|id| (id, p)))
        .collect();

    let resolve = |entry: &TeamEntry| {
        let lookup = |id: Option<PlayerId>| id.and_then(|id| by_id.get(&id).map(|&p| p.clone()));
        TeamSlots::new(lookup(entry.player_1), lookup(entry.player_2), entry.score)
    };

    records
        .iter()
        .map(|r| Game {
            id: r.id,
            team_1: resolve(&r.team_1),
            team_2: resolve(&r.team_2),
            winner: r.winner,
            played_at: r.played_at,
            created_at: r.created_at,
        })
        .collect()
}

/// Plain-text summary of a game for sharing (share sheet or clipboard, client side).
pub fn share_text(game: &Game) -> String {
    let team_1 = game.team_1.display_name();
    let team_2 = game.team_2.display_name();
    let winner = match game.winner {
        Team::One => &team_1,
        Team::Two => &team_2,
    };
    format!(
        "🏓 Pickleball Match Results\n{}: {}\n{}: {}\n{} wins! 🏆",
        team_1, game.team_1.score, team_2, game.team_2.score, winner
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn stored(name: &str) -> Player {
        Player {
            id: Some(Uuid::new_v4()),
            ..Player::new(name)
        }
    }

    fn record(team_1: TeamEntry, team_2: TeamEntry) -> GameRecord {
        GameRecord {
            id: Uuid::new_v4(),
            winner: Team::from_scores(team_1.score, team_2.score),
            team_1,
            team_2,
            played_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn hydrate_resolves_known_ids_and_drops_unknown() {
        let alice = stored("Alice");
        let bob = stored("Bob");
        let ghost = Uuid::new_v4();
        let rows = vec![record(
            TeamEntry::new(alice.id, Some(ghost), 11),
            TeamEntry::new(None, bob.id, 4),
        )];

        let games = hydrate_games(&rows, &[alice.clone(), bob.clone()]);
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!(g.team_1.player_1.as_ref(), Some(&alice));
        assert_eq!(g.team_1.player_2, None);
        assert_eq!(g.team_2.player_2.as_ref(), Some(&bob));
        assert_eq!(g.winner, Team::One);
        assert_eq!(g.id, rows[0].id);
    }

    #[test]
    fn share_text_names_the_winning_team() {
        let rows = vec![record(
            TeamEntry::new(Some(Uuid::nil()), None, 7),
            TeamEntry::new(Some(Uuid::from_u128(1)), Some(Uuid::from_u128(2)), 11),
        )];
        let players = vec![
            Player { id: Some(Uuid::nil()), ..Player::new("Alice") },
            Player { id: Some(Uuid::from_u128(1)), ..Player::new("Bob") },
            Player { id: Some(Uuid::from_u128(2)), ..Player::new("Cara") },
        ];
        let game = &hydrate_games(&rows, &players)[0];
        assert_eq!(
            share_text(game),
            "🏓 Pickleball Match Results\nAlice: 7\nBob & Cara: 11\nBob & Cara wins! 🏆"
        );
    }
}
