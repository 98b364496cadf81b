pub mod feed;
pub mod post_likes;
pub mod posts;
pub mod profiles;
pub mod user_follows;
pub mod users;
