use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeEdge {
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Like aggregate of one post as seen by one viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeSummary {
    pub likes_count: i64,
    pub is_liked: bool,
}

impl LikeSummary {
    pub fn project<'a>(
        viewer_id: Uuid,
        post_id: Uuid,
        likes: impl IntoIterator<Item = &'a LikeEdge>,
    ) -> Self {
        likes
            .into_iter()
            .filter(|like| like.post_id == post_id)
            .fold(LikeSummary::default(), |summary, like| LikeSummary {
                likes_count: summary.likes_count + 1,
                is_liked: summary.is_liked || like.user_id == viewer_id,
            })
    }
}
