use crate::models::{
    user_follows::{FollowCounts, FollowEdge},
    users::User,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::FollowStore;

// A no-op update on conflict makes RETURNING yield the existing edge, so a
// concurrent unfollow can never leave the caller without a row.
const FOLLOW_UPSERT: &str = r#"
INSERT INTO follows (follower_id, followee_id, created_at)
VALUES ($1, $2, $3)
ON CONFLICT (follower_id, followee_id)
DO UPDATE SET follower_id = EXCLUDED.follower_id
RETURNING follower_id, followee_id, created_at
"#;

pub struct FollowRepository {
    db: Arc<PgPool>,
}

impl FollowRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        FollowRepository { db }
    }
}

#[async_trait]
impl FollowStore for FollowRepository {
    async fn follow(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<FollowEdge, sqlx::Error> {
        sqlx::query_as::<_, FollowEdge>(FOLLOW_UPSERT)
            .bind(follower_id)
            .bind(followee_id)
            .bind(Utc::now())
            .fetch_one(self.db.as_ref())
            .await
    }

    async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(follower_id)
            .bind(followee_id)
            .execute(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn edges_between(&self, a: Uuid, b: Uuid) -> Result<Vec<FollowEdge>, sqlx::Error> {
        let query = r#"
        SELECT follower_id, followee_id, created_at
        FROM follows
        WHERE (follower_id = $1 AND followee_id = $2)
           OR (follower_id = $2 AND followee_id = $1)
        "#;
        sqlx::query_as::<_, FollowEdge>(query)
            .bind(a)
            .bind(b)
            .fetch_all(self.db.as_ref())
            .await
    }

    async fn counts(&self, user_id: Uuid) -> Result<FollowCounts, sqlx::Error> {
        let query = r#"
        SELECT
            (SELECT COUNT(*) FROM follows WHERE followee_id = $1) AS followers,
            (SELECT COUNT(*) FROM follows WHERE follower_id = $1) AS following
        "#;
        sqlx::query_as::<_, FollowCounts>(query)
            .bind(user_id)
            .fetch_one(self.db.as_ref())
            .await
    }

    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        let query = r#"
        SELECT u.id, u.name, u.email, u.image, u.bio, u.created_at
        FROM users u
        INNER JOIN follows f ON u.id = f.follower_id
        WHERE f.followee_id = $1
        ORDER BY f.created_at DESC, u.id DESC
        "#;

        let followers = sqlx::query_as::<_, User>(query)
            .bind(user_id)
            .fetch_all(self.db.as_ref())
            .await?;

        Ok(followers)
    }

    async fn list_following(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        let query = r#"
        SELECT u.id, u.name, u.email, u.image, u.bio, u.created_at
        FROM users u
        INNER JOIN follows f ON u.id = f.followee_id
        WHERE f.follower_id = $1
        ORDER BY f.created_at DESC, u.id DESC
        "#;

        let following = sqlx::query_as::<_, User>(query)
            .bind(user_id)
            .fetch_all(self.db.as_ref())
            .await?;

        Ok(following)
    }
}
