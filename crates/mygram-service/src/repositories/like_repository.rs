use crate::models::post_likes::LikeEdge;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::LikeStore;

// Existing likes keep their timestamp; the update only unlocks RETURNING.
const LIKE_UPSERT: &str = r#"
INSERT INTO likes (user_id, post_id, created_at)
VALUES ($1, $2, $3)
ON CONFLICT (user_id, post_id)
DO UPDATE SET user_id = EXCLUDED.user_id
RETURNING user_id, post_id, created_at
"#;

pub struct LikeRepository {
    db: Arc<PgPool>,
}

impl LikeRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        LikeRepository { db }
    }
}

#[async_trait]
impl LikeStore for LikeRepository {
    async fn like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeEdge, sqlx::Error> {
        sqlx::query_as::<_, LikeEdge>(LIKE_UPSERT)
            .bind(user_id)
            .bind(post_id)
            .bind(Utc::now())
            .fetch_one(self.db.as_ref())
            .await
    }

    async fn unlike(&self, user_id: Uuid, post_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(self.db.as_ref())
            .await?;

        Ok(())
    }
}
