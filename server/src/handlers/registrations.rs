use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;
use uuid::Uuid;

use super::actor::CurrentActor;
use super::body::OptionalJson;
use crate::models::Permission;
use crate::services::access::require_permission;
use crate::services::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Default, Deserialize)]
pub struct RegisterBody {
    #[serde(default)]
    pub student_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct RegistrationQuery {
    pub student_id: Option<Uuid>,
}

pub async fn register_student(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    OptionalJson(body): OptionalJson<RegisterBody>,
) -> Result<Response, AppError> {
    let student_id = body.student_id.unwrap_or(actor.id);
    let registration = state
        .registrations
        .register_student(event_id, student_id, &actor)?;
    Ok(created(registration, "Registered for event"))
}

pub async fn mark_attended(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(registration_id): Path<Uuid>,
) -> Result<Response, AppError> {
    require_permission(&actor, Permission::RecordAttendance)?;
    let registration = state.registrations.mark_attended(registration_id)?;
    Ok(success(registration, "Attendance recorded"))
}

/// Defaults to the caller's own registrations.
pub async fn list_registrations(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Query(query): Query<RegistrationQuery>,
) -> Result<Response, AppError> {
    let student_id = query.student_id.unwrap_or(actor.id);
    let registrations = state.queries.registrations_for_student(student_id)?;
    Ok(success(registrations, "Registrations retrieved"))
}
