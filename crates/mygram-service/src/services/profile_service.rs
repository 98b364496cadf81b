use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    models::profiles::{ProfileView, PROFILE_POSTS_LIMIT},
    repositories::{PostStore, UserStore},
    utils::api_errors::ApiError,
};

use super::follow_service::FollowService;

#[derive(Clone)]
pub struct ProfileService {
    user_store: Arc<dyn UserStore>,
    post_store: Arc<dyn PostStore>,
    follow_service: Arc<FollowService>,
}

impl ProfileService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        post_store: Arc<dyn PostStore>,
        follow_service: Arc<FollowService>,
    ) -> Self {
        ProfileService {
            user_store,
            post_store,
            follow_service,
        }
    }

    /// Builds the profile of `target_id` as seen by `viewer_id`.
    ///
    /// The own-profile redirect is left to the caller; asking for your own
    /// id here returns the same aggregate with both follow flags unset.
    pub async fn get_profile(
        &self,
        target_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> Result<ProfileView, ApiError> {
        let user = self
            .user_store
            .find_user(target_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let (post_count, posts, follow_status) = tokio::try_join!(
            async { Ok::<_, ApiError>(self.post_store.count_by_user(target_id).await?) },
            async {
                Ok::<_, ApiError>(
                    self.post_store
                        .recent_by_user(target_id, PROFILE_POSTS_LIMIT)
                        .await?,
                )
            },
            self.follow_service.get_follow_status(viewer_id, target_id),
        )?;

        info!(
            "Profile {} for viewer {:?}: {} posts, {} followers",
            target_id, viewer_id, post_count, follow_status.followers_count
        );

        Ok(ProfileView::assemble(
            user,
            post_count,
            posts,
            follow_status,
        ))
    }
}
