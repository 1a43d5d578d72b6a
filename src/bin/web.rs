//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use pickleball_tracker::{
    find_game, leaderboard, load_games, record_game, search_players, share_text, Court, CourtId,
    CourtPosition, GameId, MemoryStore, NewPlayer, PlayerDirectory, PlayerId, Team, TrackerError,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-client court: positions and pending scores + last activity time (for auto-cleanup).
struct CourtEntry {
    court: Court,
    last_activity: Instant,
}

/// Shared state: the store (players and games) plus every open court by id.
struct Tracker {
    store: MemoryStore,
    courts: RwLock<HashMap<CourtId, CourtEntry>>,
}

type AppState = Data<Tracker>;

/// Inactivity threshold: courts not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize)]
struct AssignPlayerBody {
    player_id: PlayerId,
}

#[derive(Deserialize)]
struct MovePlayerBody {
    from: CourtPosition,
    to: CourtPosition,
}

#[derive(Deserialize)]
struct ScoresBody {
    #[serde(default)]
    team_1: String,
    #[serde(default)]
    team_2: String,
}

/// Path segment: court id (e.g. /api/courts/{id})
#[derive(Deserialize)]
struct CourtPath {
    id: CourtId,
}

/// Path segments: court id and position (e.g. /api/courts/{id}/positions/team1_left)
#[derive(Deserialize)]
struct CourtPositionPath {
    id: CourtId,
    position: CourtPosition,
}

#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

/// Map a tracker error onto a JSON error response.
fn error_response(e: &TrackerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TrackerError::PlayerNotFound(_) | TrackerError::GameNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        TrackerError::Storage(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn no_court() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No court" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pickleball-tracker",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List players (oldest first), optionally filtered by ?q= on name or email.
#[get("/api/players")]
async fn api_list_players(state: AppState, query: Query<SearchQuery>) -> HttpResponse {
    match search_players(&state.store, &query.q) {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(&e),
    }
}

/// Add a player to the directory.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<NewPlayer>) -> HttpResponse {
    match state.store.insert_player(body.into_inner()) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

/// Game history, newest first.
#[get("/api/games")]
async fn api_list_games(state: AppState) -> HttpResponse {
    match load_games(&state.store, &state.store) {
        Ok(games) => HttpResponse::Ok().json(games),
        Err(e) => error_response(&e),
    }
}

/// Shareable text summary of one game (client copies it or hands it to the share sheet).
#[get("/api/games/{id}/share")]
async fn api_share_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    match find_game(&state.store, &state.store, path.id) {
        Ok(game) => HttpResponse::Ok().json(serde_json::json!({ "text": share_text(&game) })),
        Err(e) => error_response(&e),
    }
}

/// Ranked player stats, recomputed from all games.
#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    match leaderboard(&state.store, &state.store) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => error_response(&e),
    }
}

/// Create a new empty court (returns it with id; client stores id for subsequent requests).
#[post("/api/courts")]
async fn api_create_court(state: AppState) -> HttpResponse {
    let court = Court::new();
    let id = court.id;
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = HttpResponse::Ok().json(&court);
    g.insert(
        id,
        CourtEntry {
            court,
            last_activity: Instant::now(),
        },
    );
    body
}

/// Get a court by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/courts/{id}")]
async fn api_get_court(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.court)
        }
        None => no_court(),
    }
}

/// Put a directory player on a court position.
#[put("/api/courts/{id}/positions/{position}")]
async fn api_assign_position(
    state: AppState,
    path: Path<CourtPositionPath>,
    body: Json<AssignPlayerBody>,
) -> HttpResponse {
    match state.store.list_players() {
        Ok(players) if players.iter().any(|p| p.id == Some(body.player_id)) => {}
        Ok(_) => return error_response(&TrackerError::PlayerNotFound(body.player_id)),
        Err(e) => return error_response(&e),
    }
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_court(),
    };
    entry.last_activity = Instant::now();
    let c = &mut entry.court;
    match c.assign(path.position, body.player_id) {
        Ok(()) => HttpResponse::Ok().json(c),
        Err(e) => error_response(&e),
    }
}

/// Empty a court position.
#[delete("/api/courts/{id}/positions/{position}")]
async fn api_vacate_position(state: AppState, path: Path<CourtPositionPath>) -> HttpResponse {
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_court(),
    };
    entry.last_activity = Instant::now();
    entry.court.vacate(path.position);
    HttpResponse::Ok().json(&entry.court)
}

/// Move a player between positions (swaps with the target's occupant).
#[post("/api/courts/{id}/move")]
async fn api_move_player(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<MovePlayerBody>,
) -> HttpResponse {
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_court(),
    };
    entry.last_activity = Instant::now();
    entry.court.move_player(body.from, body.to);
    HttpResponse::Ok().json(&entry.court)
}

/// Update the pending score entries (raw text, validated on save).
#[put("/api/courts/{id}/scores")]
async fn api_set_scores(
    state: AppState,
    path: Path<CourtPath>,
    body: Json<ScoresBody>,
) -> HttpResponse {
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_court(),
    };
    entry.last_activity = Instant::now();
    let ScoresBody { team_1, team_2 } = body.into_inner();
    entry.court.set_score(Team::One, team_1);
    entry.court.set_score(Team::Two, team_2);
    HttpResponse::Ok().json(&entry.court)
}

/// Clear all positions and scores.
#[post("/api/courts/{id}/clear")]
async fn api_clear_court(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_court(),
    };
    entry.last_activity = Instant::now();
    entry.court.clear();
    HttpResponse::Ok().json(&entry.court)
}

/// Record the game on court, then return it with the refreshed leaderboard.
#[post("/api/courts/{id}/save")]
async fn api_save_game(state: AppState, path: Path<CourtPath>) -> HttpResponse {
    let mut g = match state.courts.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_court(),
    };
    entry.last_activity = Instant::now();
    let record = match record_game(&mut entry.court, &state.store, &state.store) {
        Ok(r) => r,
        Err(e) => return error_response(&e),
    };
    log::info!(
        "Recorded game {}: {}-{} ({:?} wins)",
        record.id,
        record.team_1.score,
        record.team_2.score,
        record.winner
    );
    match leaderboard(&state.store, &state.store) {
        Ok(stats) => HttpResponse::Ok().json(serde_json::json!({
            "game": record,
            "court": &entry.court,
            "leaderboard": stats,
        })),
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(Tracker {
        store: MemoryStore::new(),
        courts: RwLock::new(HashMap::new()),
    });

    // Background task: every 30 minutes, remove courts inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.courts.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive court(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_list_games)
            .service(api_share_game)
            .service(api_leaderboard)
            .service(api_create_court)
            .service(api_get_court)
            .service(api_assign_position)
            .service(api_vacate_position)
            .service(api_move_player)
            .service(api_set_scores)
            .service(api_clear_court)
            .service(api_save_game)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
