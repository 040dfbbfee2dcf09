//! Handlers for the `/videos` resource.
//!
//! Uploads arrive with a full YouTube URL; only the extracted 11-character
//! id is stored, and an unparseable link aborts before any write.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use pitchside_core::video_link::{
    extract_video_id, validate_category, validate_required, DEFAULT_CATEGORY,
};
use pitchside_db::models::video::{CreateVideo, UploadVideoRequest};
use pitchside_db::repositories::VideoRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the video list.
#[derive(Debug, Deserialize)]
pub struct VideoListParams {
    pub category: Option<String>,
}

/// GET /videos?category=
///
/// List videos newest first, optionally filtered to one category.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoListParams>,
) -> AppResult<impl IntoResponse> {
    let videos = match params.category.as_deref() {
        Some(category) => {
            validate_category(category)?;
            VideoRepo::list_by_category(&state.pool, category).await?
        }
        None => VideoRepo::list_newest_first(&state.pool).await?,
    };

    Ok(Json(DataResponse { data: videos }))
}

/// POST /videos
///
/// Register a new video from the upload form.
pub async fn upload_video(
    State(state): State<AppState>,
    Json(input): Json<UploadVideoRequest>,
) -> AppResult<impl IntoResponse> {
    validate_required("title", &input.title)?;
    validate_required("author", &input.author)?;

    let category = input
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    validate_category(&category)?;

    // Parse before any write: a bad link must abort the whole upload.
    let video_id = extract_video_id(&input.url)?;

    let create = CreateVideo {
        title: input.title,
        video_id,
        author: input.author,
        category,
        description: input.description,
    };
    let video = VideoRepo::create(&state.pool, &create).await?;

    tracing::info!(
        video_id = video.id,
        youtube_id = %video.video_id,
        category = %video.category,
        "Video uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}
