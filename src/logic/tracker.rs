//! Workflows over the store: record a game from the court, read history and leaderboard.

use crate::logic::history::hydrate_games;
use crate::logic::stats::compute_stats;
use crate::models::{Court, Game, GameId, GameRecord, Player, PlayerStat, TrackerError};
use crate::store::{GameStore, PlayerDirectory};

/// Save the game currently on court.
///
/// 1. Build and validate the game from positions and score entries.
/// 2. Check every player on court is in the directory.
/// 3. Insert into the store.
/// 4. Reset the score entries; players stay on court for the next game.
///
/// On error the court is left untouched.
pub fn record_game<D, S>(
    court: &mut Court,
    directory: &D,
    store: &S,
) -> Result<GameRecord, TrackerError>
where
    D: PlayerDirectory + ?Sized,
    S: GameStore + ?Sized,
{
    let game = court.to_new_game()?;

    let known = directory.list_players()?;
    let on_court = game.team_1.player_ids().chain(game.team_2.player_ids());
    for id in on_court {
        if !known.iter().any(|p| p.id == Some(id)) {
            return Err(TrackerError::PlayerNotFound(id));
        }
    }

    let record = store.insert_game(game)?;
    court.reset_scores();
    Ok(record)
}

/// Full history snapshot with players resolved, newest first.
pub fn load_games<D, S>(directory: &D, store: &S) -> Result<Vec<Game>, TrackerError>
where
    D: PlayerDirectory + ?Sized,
    S: GameStore + ?Sized,
{
    let players = directory.list_players()?;
    let records = store.list_games()?;
    Ok(hydrate_games(&records, &players))
}

/// Ranked stats recomputed from the full snapshot. Call again after every recorded game.
pub fn leaderboard<D, S>(directory: &D, store: &S) -> Result<Vec<PlayerStat>, TrackerError>
where
    D: PlayerDirectory + ?Sized,
    S: GameStore + ?Sized,
{
    let games = load_games(directory, store)?;
    Ok(compute_stats(&games))
}

/// One game from the history by id.
pub fn find_game<D, S>(directory: &D, store: &S, id: GameId) -> Result<Game, TrackerError>
where
    D: PlayerDirectory + ?Sized,
    S: GameStore + ?Sized,
{
    load_games(directory, store)?
        .into_iter()
        .find(|g| g.id == id)
        .ok_or(TrackerError::GameNotFound(id))
}

/// Directory players matching `query` on name or email, oldest first.
pub fn search_players<D>(directory: &D, query: &str) -> Result<Vec<Player>, TrackerError>
where
    D: PlayerDirectory + ?Sized,
{
    Ok(directory
        .list_players()?
        .into_iter()
        .filter(|p| p.matches_query(query))
        .collect())
}
