use crate::models::{
    feed::FeedRow,
    posts::{Post, PostWithCounts},
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::PostStore;

pub struct PostRepository {
    db: Arc<PgPool>,
}

impl PostRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PostRepository { db }
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, user_id, image_url, caption, created_at FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.db.as_ref())
        .await
    }

    async fn count_by_user(&self, user_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.db.as_ref())
            .await
    }

    async fn recent_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PostWithCounts>, sqlx::Error> {
        let query = r#"
        SELECT
            p.id, p.user_id, p.image_url, p.caption, p.created_at,
            (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS likes_count,
            (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comments_count
        FROM posts p
        WHERE p.user_id = $1
        ORDER BY p.created_at DESC, p.id DESC
        LIMIT $2
        "#;
        sqlx::query_as::<_, PostWithCounts>(query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(self.db.as_ref())
            .await
    }

    async fn feed(&self, viewer_id: Uuid) -> Result<Vec<FeedRow>, sqlx::Error> {
        let query = r#"
        SELECT
            p.id, p.user_id, p.image_url, p.caption, p.created_at,
            u.name AS author_name,
            u.image AS author_image,
            (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS likes_count,
            EXISTS (
                SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1
            ) AS is_liked
        FROM posts p
        INNER JOIN users u ON u.id = p.user_id
        ORDER BY p.created_at DESC, p.id DESC
        "#;
        sqlx::query_as::<_, FeedRow>(query)
            .bind(viewer_id)
            .fetch_all(self.db.as_ref())
            .await
    }
}
