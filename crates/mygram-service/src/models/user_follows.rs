use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A directed follow relationship: `follower_id` follows `followee_id`.
#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn connects(&self, follower_id: Uuid, followee_id: Uuid) -> bool {
        self.follower_id == follower_id && self.followee_id == followee_id
    }
}

/// Live edge counts for a single user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, FromRow)]
pub struct FollowCounts {
    pub followers: i64,
    pub following: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatus {
    /// The viewer follows the target.
    pub is_following: bool,
    /// The target follows the viewer.
    pub is_followed_by: bool,
    /// Number of users following the target.
    pub followers_count: i64,
    /// Number of users the target follows.
    pub following_count: i64,
}

impl FollowStatus {
    /// Projects the viewer-relative flags from the edges between `viewer_id`
    /// and `target_id`. Edges that do not touch both users are ignored.
    /// Anonymous viewers and viewers looking at themselves get no flags.
    pub fn project(
        viewer_id: Option<Uuid>,
        target_id: Uuid,
        edges: &[FollowEdge],
        counts: FollowCounts,
    ) -> Self {
        let (is_following, is_followed_by) = match viewer_id {
            Some(viewer_id) if viewer_id != target_id => (
                edges.iter().any(|e| e.connects(viewer_id, target_id)),
                edges.iter().any(|e| e.connects(target_id, viewer_id)),
            ),
            _ => (false, false),
        };

        FollowStatus {
            is_following,
            is_followed_by,
            followers_count: counts.followers,
            following_count: counts.following,
        }
    }

    pub fn is_mutual(&self) -> bool {
        self.is_following && self.is_followed_by
    }

    pub fn badge(&self) -> FollowBadge {
        match (self.is_following, self.is_followed_by) {
            (true, true) => FollowBadge::Mutual,
            (false, true) => FollowBadge::FollowsYou,
            _ => FollowBadge::None,
        }
    }
}

/// Relationship badge shown next to a profile name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FollowBadge {
    Mutual,
    FollowsYou,
    #[default]
    None,
}
