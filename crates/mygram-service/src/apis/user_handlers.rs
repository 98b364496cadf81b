use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    apis::viewer::Viewer,
    models::{
        user_follows::{FollowEdge, FollowStatus},
        users::UserResponse,
    },
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "users";

/// Get the follow relationship between the viewer and a user
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/follow-status",
    operation_id = "getFollowStatus",
    responses(
        (status = 200, description = "Follow status of the viewer towards the user", body = FollowStatus),
        (status = 400, description = "Malformed viewer header", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "Target user ID")
    )
)]
pub(super) async fn get_follow_status(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(target_id): Path<Uuid>,
) -> Result<Json<FollowStatus>, AppError> {
    let status = app_state
        .follow_service
        .get_follow_status(viewer.user_id, target_id)
        .await?;
    Ok(Json(status))
}

/// Follow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/follow",
    operation_id = "followUser",
    responses(
        (status = 200, description = "User followed (or already followed)", body = FollowEdge),
        (status = 400, description = "Self-follow attempt", body = ErrorPayload),
        (status = 401, description = "Anonymous viewer", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID to follow")
    )
)]
pub(super) async fn follow_user(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(target_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = viewer.require()?;
    let edge = app_state
        .follow_service
        .follow_user(viewer_id, target_id)
        .await?;
    Ok((StatusCode::OK, Json(edge)))
}

/// Unfollow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{id}/unfollow",
    operation_id = "unfollowUser",
    responses(
        (status = 204, description = "User unfollowed (or was not followed)"),
        (status = 401, description = "Anonymous viewer", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID to unfollow")
    )
)]
pub(super) async fn unfollow_user(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(target_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = viewer.require()?;
    app_state
        .follow_service
        .unfollow_user(viewer_id, target_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get followers of a user
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/followers",
    operation_id = "getFollowers",
    responses(
        (status = 200, description = "List of followers", body = Vec<UserResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    )
)]
pub(super) async fn get_followers(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let followers = app_state.follow_service.get_followers(user_id).await?;
    Ok((StatusCode::OK, Json(followers)))
}

/// Get the users a user follows
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}/following",
    operation_id = "getFollowing",
    responses(
        (status = 200, description = "List of followed users", body = Vec<UserResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    )
)]
pub(super) async fn get_following(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let following = app_state.follow_service.get_following(user_id).await?;
    Ok((StatusCode::OK, Json(following)))
}
