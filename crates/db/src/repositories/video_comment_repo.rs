//! Repository for the `video_comments` table.

use pitchside_core::types::DbId;
use sqlx::PgPool;

use crate::models::video_comment::{CommentCount, CreateVideoComment, VideoComment};

/// Column list for video_comments queries.
const COLUMNS: &str = "id, video_id, author, content, created_at";

/// Provides CRUD operations for video comments.
pub struct VideoCommentRepo;

impl VideoCommentRepo {
    /// Post a comment on a video, returning the created row.
    pub async fn create(
        pool: &PgPool,
        video_id: DbId,
        input: &CreateVideoComment,
    ) -> Result<VideoComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_comments (video_id, author, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoComment>(&query)
            .bind(video_id)
            .bind(&input.author)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List a video's comments, oldest first.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Vec<VideoComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM video_comments
             WHERE video_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, VideoComment>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a comment's content by ID, returning the updated row.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<VideoComment>, sqlx::Error> {
        let query = format!(
            "UPDATE video_comments SET content = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoComment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Comment tallies per video, for the catalogue's comment badges.
    pub async fn counts_by_video(pool: &PgPool) -> Result<Vec<CommentCount>, sqlx::Error> {
        sqlx::query_as::<_, CommentCount>(
            "SELECT video_id, COUNT(*) AS count
             FROM video_comments
             GROUP BY video_id",
        )
        .fetch_all(pool)
        .await
    }
}
