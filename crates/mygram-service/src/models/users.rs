use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn handle(&self) -> String {
        handle_from_name(&self.name)
    }
}

/// Lowercased display name with every whitespace character removed.
pub fn handle_from_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub handle: String,
    pub image: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            handle: user.handle(),
            name: user.name,
            image: user.image,
            bio: user.bio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jane Doe", "janedoe")]
    #[case("  Kim\tMin  Su ", "kimminsu")]
    #[case("ALLCAPS", "allcaps")]
    #[case("", "")]
    fn handle_strips_whitespace_and_lowercases(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(handle_from_name(name), expected);
    }

    #[test]
    fn response_carries_handle() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Photo Lover".to_string(),
            email: "photo@example.com".to_string(),
            image: None,
            bio: Some("hello".to_string()),
            created_at: Utc::now(),
        };
        let response = UserResponse::from(user.clone());
        assert_eq!(response.id, user.id);
        assert_eq!(response.handle, "photolover");
        assert_eq!(response.bio.as_deref(), Some("hello"));
    }
}
