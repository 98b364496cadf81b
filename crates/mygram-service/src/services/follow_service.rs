use crate::models::user_follows::{FollowEdge, FollowStatus};
use crate::models::users::UserResponse;
use crate::repositories::{FollowStore, UserStore};
use crate::utils::api_errors::ApiError;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Resolves and mutates follow relationships.
#[derive(Clone)]
pub struct FollowService {
    user_store: Arc<dyn UserStore>,
    follow_store: Arc<dyn FollowStore>,
}

impl FollowService {
    pub fn new(user_store: Arc<dyn UserStore>, follow_store: Arc<dyn FollowStore>) -> Self {
        Self {
            user_store,
            follow_store,
        }
    }

    /// Follow flags of `viewer_id` towards `target_id` plus the target's live counts.
    pub async fn get_follow_status(
        &self,
        viewer_id: Option<Uuid>,
        target_id: Uuid,
    ) -> Result<FollowStatus, ApiError> {
        self.ensure_user(target_id).await?;

        let counts = self.follow_store.counts(target_id).await?;
        let edges = match viewer_id {
            Some(viewer_id) if viewer_id != target_id => {
                self.follow_store
                    .edges_between(viewer_id, target_id)
                    .await?
            }
            _ => vec![],
        };

        let status = FollowStatus::project(viewer_id, target_id, &edges, counts);
        debug!(
            "Follow status {:?} -> {}: following={}, followed_by={}",
            viewer_id, target_id, status.is_following, status.is_followed_by
        );
        Ok(status)
    }

    pub async fn follow_user(
        &self,
        viewer_id: Uuid,
        target_id: Uuid,
    ) -> Result<FollowEdge, ApiError> {
        if viewer_id == target_id {
            warn!("User {} tried to follow themselves", viewer_id);
            return Err(ApiError::SelfFollow);
        }
        self.ensure_user(target_id).await?;

        let edge = self.follow_store.follow(viewer_id, target_id).await?;
        info!("User {} follows {}", viewer_id, target_id);
        Ok(edge)
    }

    pub async fn unfollow_user(&self, viewer_id: Uuid, target_id: Uuid) -> Result<(), ApiError> {
        self.follow_store.unfollow(viewer_id, target_id).await?;
        info!("User {} unfollowed {}", viewer_id, target_id);
        Ok(())
    }

    pub async fn get_followers(&self, user_id: Uuid) -> Result<Vec<UserResponse>, ApiError> {
        self.ensure_user(user_id).await?;
        let followers = self.follow_store.list_followers(user_id).await?;
        Ok(followers.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_following(&self, user_id: Uuid) -> Result<Vec<UserResponse>, ApiError> {
        self.ensure_user(user_id).await?;
        let following = self.follow_store.list_following(user_id).await?;
        Ok(following.into_iter().map(UserResponse::from).collect())
    }

    /// `UserNotFound` unless `user_id` names an existing user.
    pub async fn ensure_user(&self, user_id: Uuid) -> Result<(), ApiError> {
        match self.user_store.find_user(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::UserNotFound),
        }
    }
}
