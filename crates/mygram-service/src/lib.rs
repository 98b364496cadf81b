use apis::setup_routes;
use axum::Router;
use repositories::{
    follow_repository::FollowRepository, like_repository::LikeRepository,
    post_repository::PostRepository, user_repository::UserRepository, FollowStore, LikeStore,
    PostStore, UserStore,
};
use services::{
    feed_service::FeedService, follow_service::FollowService, profile_service::ProfileService,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod apis;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub follow_service: Arc<FollowService>,
    pub profile_service: ProfileService,
    pub feed_service: FeedService,
    pub api_key: String,
}

impl AppState {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        follow_store: Arc<dyn FollowStore>,
        post_store: Arc<dyn PostStore>,
        like_store: Arc<dyn LikeStore>,
        api_key: String,
    ) -> Self {
        let follow_service = Arc::new(FollowService::new(user_store.clone(), follow_store));
        let profile_service =
            ProfileService::new(user_store, post_store.clone(), follow_service.clone());
        let feed_service = FeedService::new(post_store, like_store);

        AppState {
            follow_service,
            profile_service,
            feed_service,
            api_key,
        }
    }
}

pub async fn setup_database(settings: &settings::Settings) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections.unwrap_or(5))
        .connect(&settings.database_url)
        .await?;

    if settings.run_migrations.unwrap_or(false) {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    Ok(Arc::new(pool))
}

pub fn setup_services(db: Arc<PgPool>, settings: &settings::Settings) -> AppState {
    AppState::new(
        Arc::new(UserRepository::new(db.clone())),
        Arc::new(FollowRepository::new(db.clone())),
        Arc::new(PostRepository::new(db.clone())),
        Arc::new(LikeRepository::new(db)),
        settings.api_key.clone(),
    )
}

pub async fn setup_router(
    settings: &settings::Settings,
) -> Result<Router, Box<dyn std::error::Error>> {
    let db = setup_database(settings).await?;
    let app_state = Arc::new(setup_services(db, settings));

    Ok(setup_routes(app_state).layer(CorsLayer::permissive()))
}

pub fn init_tracing(settings: &settings::Settings) {
    let level = if settings.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(!settings.is_production())
        .init();
}
