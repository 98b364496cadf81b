/// Errors raised by the services. Store failures are carried verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("Users cannot follow themselves")]
    SelfFollow,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
