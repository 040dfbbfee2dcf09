//! Handlers for health probes beyond the root-level liveness check.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health/db
///
/// Database reachability probe.
pub async fn db_health(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    pitchside_db::health_check(&state.pool).await?;
    Ok(Json(serde_json::json!({ "db_healthy": true })))
}
