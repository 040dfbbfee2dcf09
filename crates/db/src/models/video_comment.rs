//! Video comment model.

use pitchside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `video_comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VideoComment {
    pub id: DbId,
    pub video_id: DbId,
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for posting a comment. The video id comes from the route path.
#[derive(Debug, Deserialize)]
pub struct CreateVideoComment {
    pub author: String,
    pub content: String,
}

/// DTO for editing a comment's content.
#[derive(Debug, Deserialize)]
pub struct UpdateVideoComment {
    pub content: String,
}

/// Per-video comment tally.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentCount {
    pub video_id: DbId,
    pub count: i64,
}
