//! In-memory implementation of every store trait for tests.
//!
//! Uniqueness of follow and like edges comes from keying the maps by the
//! edge's pair, the same guarantee the Postgres primary keys give.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    feed::FeedRow,
    post_likes::{LikeEdge, LikeSummary},
    posts::{Post, PostWithCounts},
    user_follows::{FollowCounts, FollowEdge},
    users::User,
};

use super::{FollowStore, LikeStore, PostStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    posts: RwLock<HashMap<Uuid, Post>>,
    follows: RwLock<HashMap<(Uuid, Uuid), FollowEdge>>,
    likes: RwLock<HashMap<(Uuid, Uuid), LikeEdge>>,
    /// post_id -> number of comments
    comments: RwLock<HashMap<Uuid, i64>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, name: &str) -> User {
        let id = Uuid::new_v4();
        let user = User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", id.simple()),
            image: Some(format!("https://img.example.com/avatars/{}.png", id.simple())),
            bio: None,
            created_at: Utc::now(),
        };
        self.users.write().await.insert(id, user.clone());
        user
    }

    pub async fn add_post(&self, user_id: Uuid, created_at: DateTime<Utc>) -> Post {
        self.add_post_with_id(Uuid::new_v4(), user_id, created_at)
            .await
    }

    pub async fn add_post_with_id(
        &self,
        id: Uuid,
        user_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Post {
        let post = Post {
            id,
            user_id,
            image_url: format!("https://img.example.com/posts/{}.jpg", id.simple()),
            caption: None,
            created_at,
        };
        self.posts.write().await.insert(id, post.clone());
        post
    }

    pub async fn add_comment(&self, post_id: Uuid) {
        *self.comments.write().await.entry(post_id).or_default() += 1;
    }

    pub async fn follow_edge_count(&self) -> usize {
        self.follows.read().await.len()
    }

    /// Makes every subsequent call fail as if the pool could not be reached.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }

    async fn users_sorted_by_edge(&self, mut edges: Vec<(FollowEdge, Uuid)>) -> Vec<User> {
        edges.sort_by(|(a, a_user), (b, b_user)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b_user.cmp(a_user))
        });
        let users = self.users.read().await;
        edges
            .into_iter()
            .filter_map(|(_, user_id)| users.get(&user_id).cloned())
            .collect()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        self.check_available()?;
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl FollowStore for MemoryStore {
    async fn follow(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<FollowEdge, sqlx::Error> {
        self.check_available()?;
        if follower_id == followee_id {
            return Err(sqlx::Error::Protocol(
                "violates check constraint \"follows_no_self_edge\"".to_string(),
            ));
        }
        let mut follows = self.follows.write().await;
        let edge = follows
            .entry((follower_id, followee_id))
            .or_insert_with(|| FollowEdge {
                follower_id,
                followee_id,
                created_at: Utc::now(),
            });
        Ok(edge.clone())
    }

    async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<(), sqlx::Error> {
        self.check_available()?;
        self.follows
            .write()
            .await
            .remove(&(follower_id, followee_id));
        Ok(())
    }

    async fn edges_between(&self, a: Uuid, b: Uuid) -> Result<Vec<FollowEdge>, sqlx::Error> {
        self.check_available()?;
        let follows = self.follows.read().await;
        Ok([(a, b), (b, a)]
            .iter()
            .filter_map(|pair| follows.get(pair).cloned())
            .collect())
    }

    async fn counts(&self, user_id: Uuid) -> Result<FollowCounts, sqlx::Error> {
        self.check_available()?;
        let follows = self.follows.read().await;
        Ok(follows
            .values()
            .fold(FollowCounts::default(), |mut counts, edge| {
                if edge.followee_id == user_id {
                    counts.followers += 1;
                }
                if edge.follower_id == user_id {
                    counts.following += 1;
                }
                counts
            }))
    }

    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        self.check_available()?;
        let edges = self
            .follows
            .read()
            .await
            .values()
            .filter(|edge| edge.followee_id == user_id)
            .map(|edge| (edge.clone(), edge.follower_id))
            .collect();
        Ok(self.users_sorted_by_edge(edges).await)
    }

    async fn list_following(&self, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
        self.check_available()?;
        let edges = self
            .follows
            .read()
            .await
            .values()
            .filter(|edge| edge.follower_id == user_id)
            .map(|edge| (edge.clone(), edge.followee_id))
            .collect();
        Ok(self.users_sorted_by_edge(edges).await)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        self.check_available()?;
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn count_by_user(&self, user_id: Uuid) -> Result<i64, sqlx::Error> {
        self.check_available()?;
        let posts = self.posts.read().await;
        Ok(posts.values().filter(|p| p.user_id == user_id).count() as i64)
    }

    async fn recent_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PostWithCounts>, sqlx::Error> {
        self.check_available()?;
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .await
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by(Post::recency_cmp);

        let likes = self.likes.read().await;
        let comments = self.comments.read().await;
        Ok(posts
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|post| PostWithCounts {
                likes_count: likes.values().filter(|l| l.post_id == post.id).count() as i64,
                comments_count: comments.get(&post.id).copied().unwrap_or(0),
                post,
            })
            .collect())
    }

    async fn feed(&self, viewer_id: Uuid) -> Result<Vec<FeedRow>, sqlx::Error> {
        self.check_available()?;
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(Post::recency_cmp);

        let users = self.users.read().await;
        let likes = self.likes.read().await;
        Ok(posts
            .into_iter()
            .filter_map(|post| {
                let author = users.get(&post.user_id)?;
                let summary = LikeSummary::project(viewer_id, post.id, likes.values());
                Some(FeedRow::new(post, author, summary))
            })
            .collect())
    }
}

#[async_trait]
impl LikeStore for MemoryStore {
    async fn like(&self, user_id: Uuid, post_id: Uuid) -> Result<LikeEdge, sqlx::Error> {
        self.check_available()?;
        let mut likes = self.likes.write().await;
        let edge = likes
            .entry((user_id, post_id))
            .or_insert_with(|| LikeEdge {
                user_id,
                post_id,
                created_at: Utc::now(),
            });
        Ok(edge.clone())
    }

    async fn unlike(&self, user_id: Uuid, post_id: Uuid) -> Result<(), sqlx::Error> {
        self.check_available()?;
        self.likes.write().await.remove(&(user_id, post_id));
        Ok(())
    }
}
