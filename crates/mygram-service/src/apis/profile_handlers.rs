use crate::{
    apis::viewer::Viewer,
    models::profiles::ProfileView,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub const TAG: &str = "profiles";
pub const OWN_PROFILE_PATH: &str = "/api/v1/profiles/me";

/// Get the viewer's own profile
#[utoipa::path(
    get,
    tag = TAG,
    path = "/me",
    operation_id = "getOwnProfile",
    responses(
        (status = 200, description = "Own profile retrieved successfully", body = ProfileView),
        (status = 401, description = "Anonymous viewer", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_own_profile(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
) -> Result<Json<ProfileView>, AppError> {
    let viewer_id = viewer.require()?;
    let profile = app_state
        .profile_service
        .get_profile(viewer_id, Some(viewer_id))
        .await?;
    Ok(Json(profile))
}

/// Get a user's profile as seen by the viewer
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}",
    operation_id = "getProfile",
    responses(
        (status = 200, description = "Profile retrieved successfully", body = ProfileView),
        (status = 303, description = "Viewer asked for their own profile"),
        (status = 400, description = "Malformed viewer header", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    )
)]
pub(super) async fn get_profile(
    State(app_state): State<Arc<AppState>>,
    viewer: Viewer,
    Path(target_id): Path<Uuid>,
) -> Result<Response, AppError> {
    if viewer.user_id == Some(target_id) {
        // A viewer id naming a missing user is a 404, not a redirect.
        app_state.follow_service.ensure_user(target_id).await?;
        debug!("Redirecting {} to own profile", target_id);
        return Ok(Redirect::to(OWN_PROFILE_PATH).into_response());
    }

    let profile = app_state
        .profile_service
        .get_profile(target_id, viewer.user_id)
        .await?;
    Ok(Json(profile).into_response())
}
