pub mod health;

use axum::routing::{get, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /players                         list (GET), register (POST)
/// /players/placements              save full roster placements (PUT)
///
/// /board                           board view: partitions + device state (GET)
/// /board/opponents                 save opponent markers (PUT)
/// /board/lines                     save annotation lines (PUT)
///
/// /videos                          list, optionally ?category= (GET), upload (POST)
/// /videos/{id}/comments            list (GET), post (POST)
/// /comments/{id}                   edit (PUT), delete (DELETE)
/// /comments/counts                 per-video tallies (GET)
///
/// /health/db                       database reachability probe (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/players",
            get(handlers::players::list_players).post(handlers::players::register_player),
        )
        .route(
            "/players/placements",
            put(handlers::players::save_placements),
        )
        .route("/board", get(handlers::board::get_board))
        .route("/board/opponents", put(handlers::board::save_opponents))
        .route("/board/lines", put(handlers::board::save_lines))
        .route(
            "/videos",
            get(handlers::videos::list_videos).post(handlers::videos::upload_video),
        )
        .route(
            "/videos/{id}/comments",
            get(handlers::comments::list_comments).post(handlers::comments::post_comment),
        )
        .route("/comments/counts", get(handlers::comments::comment_counts))
        .route(
            "/comments/{id}",
            put(handlers::comments::edit_comment).delete(handlers::comments::delete_comment),
        )
        .route("/health/db", get(handlers::health::db_health))
}
