use axum::response::Response;
use serde::Serialize;

use crate::utils::response::success;

pub mod actor;
pub mod assignments;
pub mod body;
pub mod dashboard;
pub mod events;
pub mod registrations;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "campus-events-api",
    };

    success(payload, "Health check successful")
}
