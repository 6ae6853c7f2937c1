use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::actor::CurrentActor;
use crate::services::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct AssignBody {
    pub volunteer_id: Uuid,
    pub task: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentQuery {
    pub volunteer_id: Option<Uuid>,
}

pub async fn assign_volunteer(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    Json(body): Json<AssignBody>,
) -> Result<Response, AppError> {
    let assignment =
        state
            .assignments
            .assign_volunteer(event_id, body.volunteer_id, &body.task, &actor)?;
    Ok(created(assignment, "Volunteer assigned"))
}

pub async fn accept_assignment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(assignment_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let assignment = state.assignments.accept_assignment(assignment_id, &actor)?;
    Ok(success(assignment, "Assignment accepted"))
}

pub async fn complete_assignment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(assignment_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let assignment = state.assignments.complete_assignment(assignment_id, &actor)?;
    Ok(success(assignment, "Assignment completed"))
}

/// Defaults to the caller's own assignments.
pub async fn list_assignments(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Query(query): Query<AssignmentQuery>,
) -> Result<Response, AppError> {
    let volunteer_id = query.volunteer_id.unwrap_or(actor.id);
    let assignments = state.queries.assignments_for_volunteer(volunteer_id)?;
    Ok(success(assignments, "Assignments retrieved"))
}
