//! Storage seams. Services only talk to these traits; the Postgres
//! repositories implement them for production and `memory::MemoryStore`
//! implements them for tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    feed::FeedRow,
    post_likes::LikeEdge,
    posts::{Post, PostWithCounts},
    user_follows::{FollowCounts, FollowEdge},
    users::User,
};

pub mod follow_repository;
pub mod like_repository;
#[cfg(test)]
pub mod memory;
pub mod post_repository;
pub mod user_repository;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;
}

#[async_trait]
pub trait FollowStore: Send + Sync {
    /// Inserts the edge unless it already exists and returns the stored edge.
    async fn follow(&self, follower_id: Uuid, followee_id: Uuid)
        -> Result<FollowEdge, sqlx::Error>;

    /// Removes the edge if present.
    async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<(), sqlx::Error>;

    /// Edges in either direction between the two users.
    async fn edges_between(&self, a: Uuid, b: Uuid) -> Result<Vec<FollowEdge>, sqlx::Error>;

    async fn counts(&self, user_id: Uuid) -> Result<FollowCounts, sqlx::Error>;

    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error>;

    async fn list_following(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, sqlx::Error>;

    async fn count_by_user(&self, user_id: Uuid) -> Result<i64, sqlx::Error>;

    /// The `limit` most recent posts of a user with like and comment counts.
    async fn recent_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PostWithCounts>, sqlx::Error>;

    /// Every post, most recent first, with like aggregates for `viewer_id`.
    async fn feed(&self, viewer_id: Uuid) -> Result<Vec<FeedRow>, sqlx::Error>;
}

#[async_trait]
pub trait LikeStore: Send + Sync {
    async fn like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeEdge, sqlx::Error>;

    async fn unlike(&self, user_id: Uuid, post_id: Uuid) -> Result<(), sqlx::Error>;
}
