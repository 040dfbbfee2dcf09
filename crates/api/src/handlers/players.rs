//! Handlers for the `/players` resource.
//!
//! The roster is small enough to live in one list: registration inserts a
//! player at the centre of the board, and the tactics-board save writes the
//! whole roster back in one batch upsert.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pitchside_core::video_link::validate_required;
use pitchside_db::models::player::{CreatePlayer, PlayerRecord};
use pitchside_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Jersey numbers accepted by the registration form.
const MAX_JERSEY_NUMBER: i32 = 99;

/// GET /players
///
/// List the full roster ordered by jersey number ascending.
pub async fn list_players(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let players = PlayerRepo::list_by_number(&state.pool).await?;
    Ok(Json(DataResponse { data: players }))
}

/// POST /players
///
/// Register a new player. Placement is not part of the form; the new signing
/// starts at the centre of the board.
pub async fn register_player(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<impl IntoResponse> {
    validate_required("name", &input.name)?;
    validate_required("position", &input.position)?;
    if !(0..=MAX_JERSEY_NUMBER).contains(&input.number) {
        return Err(AppError::BadRequest(format!(
            "number must be between 0 and {MAX_JERSEY_NUMBER}, got {}",
            input.number
        )));
    }

    let player = PlayerRepo::create(&state.pool, &input).await?;

    tracing::info!(
        player_id = player.id,
        number = player.number,
        position = %player.position,
        "Player registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: player })))
}

/// PUT /players/placements
///
/// Save the full roster's placements. Every record is checked against the
/// both-or-neither placement invariant before any write; the batch is then
/// upserted last-writer-wins with no concurrency check.
pub async fn save_placements(
    State(state): State<AppState>,
    Json(records): Json<Vec<PlayerRecord>>,
) -> AppResult<impl IntoResponse> {
    for record in &records {
        record.placement()?;
    }

    let saved = PlayerRepo::upsert_roster(&state.pool, &records).await?;

    let on_field = saved
        .iter()
        .filter(|p| p.pos_top.is_some())
        .count();
    tracing::info!(
        roster = saved.len(),
        on_field,
        bench = saved.len() - on_field,
        "Roster placements saved"
    );

    Ok(Json(DataResponse { data: saved }))
}
