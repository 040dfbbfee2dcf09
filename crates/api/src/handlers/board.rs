//! Handlers for the tactics-board view and its device-store state.
//!
//! The board load partitions the roster into on-field and bench lists and
//! attaches the device-scoped extras (opponent markers, annotation lines),
//! falling back to defaults when the store has never been written.
//! Device-store writes are fire-and-forget: a failure is logged, not
//! surfaced, so a flaky disk never blocks the board.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use pitchside_core::board::{default_opponents, OpponentMarker, StoredOpponent};
use pitchside_core::device_store::{OPPONENTS_KEY, SAVED_LINES_KEY};
use pitchside_core::drawing::{validate_line, AnnotationLine};
use pitchside_core::placement::partition_roster;
use pitchside_db::models::player::Player;
use pitchside_db::repositories::PlayerRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the tactics board needs on mount.
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub on_field: Vec<Player>,
    pub bench: Vec<Player>,
    pub opponents: Vec<StoredOpponent>,
    pub lines: Vec<AnnotationLine>,
}

/// GET /board
///
/// Load the board: roster partitioned by placement presence (order within
/// each partition follows jersey number), plus opponents and lines from the
/// device store, with presets/empty as the first-visit defaults.
pub async fn get_board(State(state): State<AppState>) -> AppResult<Json<BoardView>> {
    let players = PlayerRepo::list_by_number(&state.pool).await?;

    // A malformed row (half-set placement pair) fails the load; the schema
    // CHECK makes this unreachable in practice.
    for player in &players {
        player.placement()?;
    }
    let (on_field, bench) = partition_roster(players, |p: &Player| p.pos_top.is_some());

    let opponents = state
        .device_store
        .get::<Vec<StoredOpponent>>(OPPONENTS_KEY)?
        .unwrap_or_else(|| default_opponents().iter().map(|o| o.to_stored()).collect());

    let lines = state
        .device_store
        .get::<Vec<AnnotationLine>>(SAVED_LINES_KEY)?
        .unwrap_or_default();

    Ok(Json(BoardView {
        on_field,
        bench,
        opponents,
        lines,
    }))
}

/// PUT /board/opponents
///
/// Save the opposing-formation markers. Coordinates are validated as
/// percentage strings; the write itself is fire-and-forget.
pub async fn save_opponents(
    State(state): State<AppState>,
    Json(opponents): Json<Vec<StoredOpponent>>,
) -> AppResult<impl IntoResponse> {
    for stored in &opponents {
        OpponentMarker::from_stored(stored)?;
    }

    if let Err(err) = state.device_store.put(OPPONENTS_KEY, &opponents) {
        tracing::warn!(error = %err, "Device store write failed for opponent markers");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /board/lines
///
/// Save the annotation line collection. Each line must be a valid finalized
/// line (>= 2 points, sane colour and width); the write is fire-and-forget.
pub async fn save_lines(
    State(state): State<AppState>,
    Json(lines): Json<Vec<AnnotationLine>>,
) -> AppResult<impl IntoResponse> {
    for line in &lines {
        validate_line(line)?;
    }

    if let Err(err) = state.device_store.put(SAVED_LINES_KEY, &lines) {
        tracing::warn!(error = %err, "Device store write failed for annotation lines");
    }

    Ok(StatusCode::NO_CONTENT)
}
