use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    posts::PostWithCounts,
    user_follows::{FollowBadge, FollowStatus},
    users::User,
};

/// Page-1 size of the profile post grid.
pub const PROFILE_POSTS_LIMIT: i64 = 12;
/// Profiles with more posts than this get the verified badge.
pub const VERIFIED_POST_THRESHOLD: i64 = 10;

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePost {
    pub id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
    pub comments_count: i64,
}

impl From<PostWithCounts> for ProfilePost {
    fn from(row: PostWithCounts) -> Self {
        ProfilePost {
            id: row.post.id,
            image_url: row.post.image_url,
            caption: row.post.caption,
            created_at: row.post.created_at,
            likes_count: row.likes_count,
            comments_count: row.comments_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: Uuid,
    pub name: String,
    pub handle: String,
    pub email: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub post_count: i64,
    pub is_verified: bool,
    pub follow_status: FollowStatus,
    pub badge: FollowBadge,
    pub posts: Vec<ProfilePost>,
}

impl ProfileView {
    pub fn assemble(
        user: User,
        post_count: i64,
        posts: Vec<PostWithCounts>,
        follow_status: FollowStatus,
    ) -> Self {
        ProfileView {
            handle: user.handle(),
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            bio: user.bio,
            joined_at: user.created_at,
            post_count,
            is_verified: post_count > VERIFIED_POST_THRESHOLD,
            badge: follow_status.badge(),
            follow_status,
            posts: posts.into_iter().map(ProfilePost::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Sun Shine".to_string(),
            email: "sun@example.com".to_string(),
            image: None,
            bio: None,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(0, false)]
    #[case(10, false)]
    #[case(11, true)]
    fn verified_after_threshold(#[case] post_count: i64, #[case] verified: bool) {
        let view = ProfileView::assemble(user(), post_count, vec![], FollowStatus::default());
        assert_eq!(view.is_verified, verified);
    }

    #[test]
    fn badge_follows_status() {
        let status = FollowStatus {
            is_following: true,
            is_followed_by: true,
            followers_count: 1,
            following_count: 1,
        };
        let view = ProfileView::assemble(user(), 0, vec![], status);
        assert_eq!(view.badge, FollowBadge::Mutual);
        assert_eq!(view.handle, "sunshine");
        assert_eq!(view.follow_status, status);
    }
}
