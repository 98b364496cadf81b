use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    apis::viewer::Viewer,
    models::{feed::FeedPost, post_likes::LikeEdge},
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "feed";

/// Get the viewer's feed
#[utoipa::path(
    get,
    tag = TAG,
    path = "/feed",
    operation_id = "getFeed",
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<FeedPost>),
        (status = 401, description = "Anonymous viewer", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_feed(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
) -> Result<Json<Vec<FeedPost>>, AppError> {
    let viewer_id = viewer.require()?;
    debug!("Loading feed for {} ({:?})", viewer_id, viewer.name);
    let feed = app_state.feed_service.get_feed(viewer_id).await?;
    Ok(Json(feed))
}

/// Like a post
#[utoipa::path(
    post,
    tag = TAG,
    path = "/posts/{id}/like",
    operation_id = "likePost",
    responses(
        (status = 200, description = "Post liked (or already liked)", body = LikeEdge),
        (status = 401, description = "Anonymous viewer", body = ErrorPayload),
        (status = 404, description = "Post not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "Post ID")
    )
)]
pub(super) async fn like_post(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = viewer.require()?;
    let like = app_state.feed_service.like_post(viewer_id, post_id).await?;
    Ok((StatusCode::OK, Json(like)))
}

/// Remove a like from a post
#[utoipa::path(
    post,
    tag = TAG,
    path = "/posts/{id}/unlike",
    operation_id = "unlikePost",
    responses(
        (status = 204, description = "Like removed (or was not present)"),
        (status = 401, description = "Anonymous viewer", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "Post ID")
    )
)]
pub(super) async fn unlike_post(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = viewer.require()?;
    app_state
        .feed_service
        .unlike_post(viewer_id, post_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
