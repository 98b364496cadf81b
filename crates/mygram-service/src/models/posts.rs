use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Most recent first, ties broken by id descending. Matches
    /// `ORDER BY created_at DESC, id DESC`.
    pub fn recency_cmp(&self, other: &Post) -> Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct PostWithCounts {
    #[sqlx(flatten)]
    pub post: Post,
    pub likes_count: i64,
    pub comments_count: i64,
}
