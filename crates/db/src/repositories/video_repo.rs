//! Repository for the `videos` table.

use pitchside_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, Video};

/// Column list for videos queries.
const COLUMNS: &str = "id, title, video_id, author, category, description, created_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Create a new video entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (title, video_id, author, category, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.video_id)
            .bind(&input.author)
            .bind(&input.category)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a video by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos, newest first.
    pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY created_at DESC");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// List videos in one category, newest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos WHERE category = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
