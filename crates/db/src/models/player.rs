//! Player model.

use pitchside_core::error::CoreError;
use pitchside_core::placement::Placement;
use pitchside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `players` table. `pos_top` / `pos_left` are percentage
/// strings or null — both or neither, enforced by a schema CHECK.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub position: String,
    pub pos_top: Option<String>,
    pub pos_left: Option<String>,
    pub created_at: Timestamp,
}

impl Player {
    /// Decode the placement column pair into the tagged model type.
    pub fn placement(&self) -> Result<Placement, CoreError> {
        Placement::from_columns(self.pos_top.as_deref(), self.pos_left.as_deref())
    }
}

/// DTO for registering a new player. Placement is not part of the form; new
/// signings start at the centre of the board.
#[derive(Debug, Deserialize)]
pub struct CreatePlayer {
    pub name: String,
    pub number: i32,
    pub position: String,
}

/// One roster entry in the full-roster placement save. Carries the complete
/// record because the save is a last-writer-wins upsert of every field.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub id: DbId,
    pub name: String,
    pub number: i32,
    pub position: String,
    pub pos_top: Option<String>,
    pub pos_left: Option<String>,
}

impl PlayerRecord {
    pub fn placement(&self) -> Result<Placement, CoreError> {
        Placement::from_columns(self.pos_top.as_deref(), self.pos_left.as_deref())
    }
}
