use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    models::{feed::FeedPost, post_likes::LikeEdge},
    repositories::{LikeStore, PostStore},
    utils::api_errors::ApiError,
};

#[derive(Clone)]
pub struct FeedService {
    post_store: Arc<dyn PostStore>,
    like_store: Arc<dyn LikeStore>,
}

impl FeedService {
    pub fn new(post_store: Arc<dyn PostStore>, like_store: Arc<dyn LikeStore>) -> Self {
        FeedService {
            post_store,
            like_store,
        }
    }

    /// Every post, newest first, with live like counts and the viewer's like flag.
    ///
    /// Unpaginated: the whole table is returned.
    pub async fn get_feed(&self, viewer_id: Uuid) -> Result<Vec<FeedPost>, ApiError> {
        let rows = self.post_store.feed(viewer_id).await?;
        debug!("Feed for {} has {} posts", viewer_id, rows.len());
        Ok(rows.into_iter().map(FeedPost::from).collect())
    }

    pub async fn like_post(&self, viewer_id: Uuid, post_id: Uuid) -> Result<LikeEdge, ApiError> {
        self.post_store
            .find_post(post_id)
            .await?
            .ok_or(ApiError::PostNotFound)?;

        let like = self.like_store.like(viewer_id, post_id).await?;
        info!("User {} liked post {}", viewer_id, post_id);
        Ok(like)
    }

    pub async fn unlike_post(&self, viewer_id: Uuid, post_id: Uuid) -> Result<(), ApiError> {
        self.like_store.unlike(viewer_id, post_id).await?;
        info!("User {} unliked post {}", viewer_id, post_id);
        Ok(())
    }
}
