use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{post_likes::LikeSummary, posts::Post, users::User};

/// Row shape of the feed query: a post, its author and the viewer's like aggregate.
#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct FeedRow {
    #[sqlx(flatten)]
    pub post: Post,
    pub author_name: String,
    pub author_image: Option<String>,
    pub likes_count: i64,
    pub is_liked: bool,
}

impl FeedRow {
    pub fn new(post: Post, author: &User, likes: LikeSummary) -> Self {
        FeedRow {
            post,
            author_name: author.name.clone(),
            author_image: author.image.clone(),
            likes_count: likes.likes_count,
            is_liked: likes.is_liked,
        }
    }
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author: PostAuthor,
    pub likes_count: i64,
    pub is_liked: bool,
}

impl From<FeedRow> for FeedPost {
    fn from(row: FeedRow) -> Self {
        FeedPost {
            id: row.post.id,
            image_url: row.post.image_url,
            caption: row.post.caption,
            created_at: row.post.created_at,
            author: PostAuthor {
                id: row.post.user_id,
                name: row.author_name,
                image: row.author_image,
            },
            likes_count: row.likes_count,
            is_liked: row.is_liked,
        }
    }
}
