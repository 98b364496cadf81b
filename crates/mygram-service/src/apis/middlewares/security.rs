use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::HeaderName, Request},
    middleware::Next,
    response::Response,
};
use once_cell::sync::Lazy;
use tracing::warn;

use crate::{utils::errors::app_error::AppError, AppState};

pub static API_KEY_HEADER: Lazy<HeaderName> = Lazy::new(|| HeaderName::from_static("x-api-key"));

pub async fn verify_api_key(
    State(app_state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = request
        .headers()
        .get(API_KEY_HEADER.as_str())
        .and_then(|header| header.to_str().ok());

    match api_key {
        Some(key) if key == app_state.api_key => Ok(next.run(request).await),
        Some(_) => {
            warn!("Rejected request to {} with invalid API key", request.uri());
            Err(AppError::Unauthorized("Invalid API key".to_string()))
        }
        None => Err(AppError::Unauthorized("Missing API key".to_string())),
    }
}
