use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::HeaderName, request::Parts, HeaderMap},
};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::utils::errors::app_error::AppError;

pub static USER_ID_HEADER: Lazy<HeaderName> = Lazy::new(|| HeaderName::from_static("x-user-id"));
pub static USER_NAME_HEADER: Lazy<HeaderName> =
    Lazy::new(|| HeaderName::from_static("x-user-name"));
pub static USER_IMAGE_HEADER: Lazy<HeaderName> =
    Lazy::new(|| HeaderName::from_static("x-user-image"));

/// The caller as reported by the identity gateway. `user_id` is `None` for
/// anonymous requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    pub user_id: Option<Uuid>,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl Viewer {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let user_id = match headers.get(USER_ID_HEADER.as_str()) {
            None => None,
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| AppError::BadRequest("Malformed user id header".to_string()))?;
                Some(Uuid::parse_str(raw.trim()).map_err(|e| {
                    AppError::BadRequest(format!("Malformed user id header: {}", e))
                })?)
            }
        };

        let text = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        Ok(Viewer {
            user_id,
            name: text(USER_NAME_HEADER.as_str()),
            image: text(USER_IMAGE_HEADER.as_str()),
        })
    }

    /// The viewer's id, or `Unauthorized` for anonymous callers.
    pub fn require(&self) -> Result<Uuid, AppError> {
        self.user_id
            .ok_or_else(|| AppError::Unauthorized("Sign in required".to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Viewer::from_headers(&parts.headers)
    }
}
