//! Integration tests for the in-memory store and the record/read workflows built on it.

use pickleball_tracker::{
    find_game, leaderboard, load_games, record_game, search_players, Court, CourtPosition,
    GameStore, MemoryStore, NewGame, NewPlayer, Player, PlayerDirectory, Team, TeamEntry,
    TrackerError,
};
use uuid::Uuid;

fn add(store: &MemoryStore, name: &str) -> Player {
    store.insert_player(NewPlayer::new(name, None)).unwrap()
}

fn singles(court: &mut Court, left: &Player, right: &Player, score_1: &str, score_2: &str) {
    court.clear();
    court.assign(CourtPosition::Team1Left, left.id.unwrap()).unwrap();
    court.assign(CourtPosition::Team2Left, right.id.unwrap()).unwrap();
    court.set_score(Team::One, score_1);
    court.set_score(Team::Two, score_2);
}

#[test]
fn directory_assigns_ids_and_lists_oldest_first() {
    let store = MemoryStore::new();
    let alice = store
        .insert_player(NewPlayer::new(" Alice ", Some("alice@example.com".into())))
        .unwrap();
    let bob = add(&store, "Bob");

    assert!(alice.id.is_some());
    assert!(alice.created_at.is_some());
    assert_eq!(alice.name, "Alice");
    assert_ne!(alice.id, bob.id);

    let listed = store.list_players().unwrap();
    assert_eq!(listed, vec![alice, bob]);
}

#[test]
fn directory_rejects_blank_name() {
    let store = MemoryStore::new();
    assert_eq!(
        store.insert_player(NewPlayer::new("   ", None)),
        Err(TrackerError::EmptyPlayerName)
    );
    assert!(store.list_players().unwrap().is_empty());
}

#[test]
fn search_matches_name_and_email() {
    let store = MemoryStore::new();
    add(&store, "Alice");
    store
        .insert_player(NewPlayer::new("Bob", Some("dinkmaster@example.com".into())))
        .unwrap();

    let hits = search_players(&store, "DINK").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Bob");
    assert_eq!(search_players(&store, "").unwrap().len(), 2);
}

#[test]
fn game_store_lists_newest_first() {
    let store = MemoryStore::new();
    let a = add(&store, "A");
    let b = add(&store, "B");

    let mut ids = Vec::new();
    for score in [1, 2, 3] {
        let g = NewGame::new(
            TeamEntry::new(a.id, None, score),
            TeamEntry::new(b.id, None, 11),
        );
        ids.push(store.insert_game(g).unwrap().id);
    }

    let listed: Vec<Uuid> = store.list_games().unwrap().into_iter().map(|g| g.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[test]
fn game_store_rejects_invalid_games() {
    let store = MemoryStore::new();
    let a = add(&store, "A");
    let g = NewGame::new(TeamEntry::new(a.id, None, 11), TeamEntry::default());
    assert_eq!(store.insert_game(g), Err(TrackerError::EmptyTeam(Team::Two)));
    assert!(store.list_games().unwrap().is_empty());
}

#[test]
fn game_store_rejects_winner_contradicting_scores() {
    let store = MemoryStore::new();
    let alice = add(&store, "Alice");
    let bob = add(&store, "Bob");
    let mut g = NewGame::new(
        TeamEntry::new(alice.id, None, 11),
        TeamEntry::new(bob.id, None, 2),
    );
    g.winner = Team::Two;

    assert_eq!(
        store.insert_game(g),
        Err(TrackerError::WinnerMismatch {
            expected: Team::One,
            recorded: Team::Two,
        })
    );
    assert!(store.list_games().unwrap().is_empty());
    assert!(leaderboard(&store, &store).unwrap().is_empty());
}

#[test]
fn played_at_defaults_to_creation_date() {
    let store = MemoryStore::new();
    let a = add(&store, "A");
    let b = add(&store, "B");
    let record = store
        .insert_game(NewGame::new(
            TeamEntry::new(a.id, None, 11),
            TeamEntry::new(b.id, None, 8),
        ))
        .unwrap();
    assert_eq!(record.played_at, record.created_at.date_naive());
}

#[test]
fn record_game_persists_and_keeps_players_on_court() {
    let store = MemoryStore::new();
    let alice = add(&store, "Alice");
    let bob = add(&store, "Bob");
    let mut court = Court::new();
    singles(&mut court, &alice, &bob, "11", "5");

    let record = record_game(&mut court, &store, &store).unwrap();
    assert_eq!(record.winner, Team::One);
    assert_eq!(court.scores.team_1, "");
    assert_eq!(court.scores.team_2, "");
    assert_eq!(court.team_players(Team::One), vec![alice.id.unwrap()]);

    // Read-after-write: the new game is in the next snapshot.
    let games = load_games(&store, &store).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, record.id);
    assert_eq!(games[0].team_1.player_1.as_ref(), Some(&alice));
}

#[test]
fn record_game_rejects_unknown_player_and_leaves_court_alone() {
    let store = MemoryStore::new();
    let alice = add(&store, "Alice");
    let stranger = Player {
        id: Some(Uuid::new_v4()),
        ..Player::new("Stranger")
    };
    let mut court = Court::new();
    singles(&mut court, &alice, &stranger, "11", "2");
    let before = court.clone();

    assert_eq!(
        record_game(&mut court, &store, &store),
        Err(TrackerError::PlayerNotFound(stranger.id.unwrap()))
    );
    assert_eq!(court, before);
    assert!(store.list_games().unwrap().is_empty());
}

#[test]
fn leaderboard_is_recomputed_after_every_game() {
    let store = MemoryStore::new();
    let alice = add(&store, "Alice");
    let bob = add(&store, "Bob");
    let mut court = Court::new();

    assert!(leaderboard(&store, &store).unwrap().is_empty());

    singles(&mut court, &alice, &bob, "11", "5");
    record_game(&mut court, &store, &store).unwrap();
    let first = leaderboard(&store, &store).unwrap();
    assert_eq!(first[0].player.name, "Alice");

    singles(&mut court, &bob, &alice, "11", "3");
    record_game(&mut court, &store, &store).unwrap();
    singles(&mut court, &bob, &alice, "11", "9");
    record_game(&mut court, &store, &store).unwrap();

    let board = leaderboard(&store, &store).unwrap();
    assert_eq!(board[0].player.name, "Bob");
    assert_eq!((board[0].wins, board[0].games_played), (2, 3));
    assert_eq!(board[0].total_points, 27);
    assert_eq!(board[1].win_rate, 33.3);
}

#[test]
fn find_game_by_id() {
    let store = MemoryStore::new();
    let alice = add(&store, "Alice");
    let bob = add(&store, "Bob");
    let mut court = Court::new();
    singles(&mut court, &alice, &bob, "8", "11");
    let record = record_game(&mut court, &store, &store).unwrap();

    let game = find_game(&store, &store, record.id).unwrap();
    assert_eq!(game.winner, Team::Two);

    let missing = Uuid::new_v4();
    assert_eq!(
        find_game(&store, &store, missing),
        Err(TrackerError::GameNotFound(missing))
    );
}
