use std::sync::Arc;

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod feed_handlers;
pub mod middlewares;
pub mod profile_handlers;
pub mod user_handlers;
pub mod viewer;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "users", description = "Follow relationships"),
        (name = "profiles", description = "Profile pages"),
        (name = "feed", description = "Post feed and likes")
    )
)]
pub struct ApiDoc;

pub fn setup_routes(app_state: Arc<AppState>) -> Router {
    let api_doc = ApiDoc::openapi();

    let user_router = OpenApiRouter::new()
        .routes(routes!(user_handlers::get_follow_status))
        .routes(routes!(user_handlers::follow_user))
        .routes(routes!(user_handlers::unfollow_user))
        .routes(routes!(user_handlers::get_followers))
        .routes(routes!(user_handlers::get_following));

    let profile_router = OpenApiRouter::new()
        .routes(routes!(profile_handlers::get_own_profile))
        .routes(routes!(profile_handlers::get_profile));

    let feed_router = OpenApiRouter::new()
        .routes(routes!(feed_handlers::get_feed))
        .routes(routes!(feed_handlers::like_post))
        .routes(routes!(feed_handlers::unlike_post));

    let router = OpenApiRouter::with_openapi(api_doc)
        .nest("/users", user_router)
        .nest("/profiles", profile_router)
        .merge(feed_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    let api_router = api_router.route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        middlewares::security::verify_api_key,
    ));

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
        .with_state(app_state)
}
