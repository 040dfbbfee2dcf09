//! Video model.

use pitchside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    /// The 11-character YouTube identifier, not the full URL.
    pub video_id: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// Insert DTO once the submitted URL has been parsed down to its id.
#[derive(Debug)]
pub struct CreateVideo {
    pub title: String,
    pub video_id: String,
    pub author: String,
    pub category: String,
    pub description: String,
}

/// Raw upload form payload; `url` still needs parsing.
#[derive(Debug, Deserialize)]
pub struct UploadVideoRequest {
    pub title: String,
    pub url: String,
    pub author: String,
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
}
