use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::utils::error::AppError;

/// JSON body that may be left out entirely. An empty body yields
/// `T::default()`; anything else must be well-formed JSON or the request
/// fails with a validation error.
pub struct OptionalJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_ascii_lowercase());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::ValidationError(format!("Unreadable request body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(T::default()));
        }

        if let Some(content_type) = content_type {
            if !content_type.starts_with("application/json") {
                return Err(AppError::ValidationError(format!(
                    "Expected an application/json body, got {}",
                    content_type
                )));
            }
        }

        serde_json::from_slice(&bytes)
            .map(OptionalJson)
            .map_err(|e| AppError::ValidationError(format!("Malformed JSON body: {}", e)))
    }
}
