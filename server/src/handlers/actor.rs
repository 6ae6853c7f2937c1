use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::models::Actor;
use crate::services::AppState;
use crate::utils::error::AppError;

/// Header carrying the id of the authenticated user. Authentication itself
/// happens upstream; this layer only resolves the id against the directory.
pub const ACTOR_HEADER: &str = "x-actor-id";
const FORWARDED_FOR: &str = "x-forwarded-for";

pub struct CurrentActor(pub Actor);

#[async_trait]
impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTOR_HEADER)
            .ok_or_else(|| AppError::AuthError(format!("Missing {} header", ACTOR_HEADER)))?;

        let id = raw
            .to_str()
            .ok()
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or_else(|| AppError::AuthError("Malformed actor id".to_string()))?;

        let user = state.store.find_user(id).map_err(|e| match e {
            AppError::NotFound(_) => AppError::AuthError(format!("Unknown actor '{}'", id)),
            other => other,
        })?;

        let ip_address = parts
            .headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(CurrentActor(Actor::from(&user).with_ip(ip_address)))
    }
}
