//! Handlers for video comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pitchside_core::error::CoreError;
use pitchside_core::types::DbId;
use pitchside_core::video_link::validate_required;
use pitchside_db::models::video_comment::{CreateVideoComment, UpdateVideoComment};
use pitchside_db::repositories::{VideoCommentRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /videos/{id}/comments
///
/// List a video's comments, oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = VideoCommentRepo::list_by_video(&state.pool, video_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /videos/{id}/comments
///
/// Post a comment. Both author and content are required.
pub async fn post_comment(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<CreateVideoComment>,
) -> AppResult<impl IntoResponse> {
    validate_required("author", &input.author)?;
    validate_required("content", &input.content)?;

    let video = VideoRepo::find_by_id(&state.pool, video_id).await?;
    if video.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }));
    }

    let comment = VideoCommentRepo::create(&state.pool, video_id, &input).await?;

    tracing::info!(comment_id = comment.id, video_id, "Comment posted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// PUT /comments/{id}
///
/// Replace a comment's content.
pub async fn edit_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideoComment>,
) -> AppResult<impl IntoResponse> {
    validate_required("content", &input.content)?;

    let comment = VideoCommentRepo::update_content(&state.pool, id, &input.content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = VideoCommentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /comments/counts
///
/// Per-video comment tallies for the catalogue's badges.
pub async fn comment_counts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = VideoCommentRepo::counts_by_video(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
