pub mod feed_service;
pub mod follow_service;
pub mod profile_service;
