use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::actor::CurrentActor;
use super::body::OptionalJson;
use crate::models::{EventChanges, EventFilter, NewEvent};
use crate::services::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Default, Deserialize)]
pub struct CommentBody {
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReasonBody {
    #[serde(default)]
    pub reason: String,
}

pub async fn create_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(input): Json<NewEvent>,
) -> Result<Response, AppError> {
    let event = state.workflow.create_event(&actor, input)?;
    Ok(created(event, "Event created"))
}

pub async fn list_events(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Query(filter): Query<EventFilter>,
) -> Result<Response, AppError> {
    let events = state.queries.query_events(&filter)?;
    Ok(success(events, "Events retrieved"))
}

pub async fn get_event(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(event_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let detail = state.queries.get_event(event_id)?;
    Ok(success(detail, "Event retrieved"))
}

pub async fn update_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    Json(changes): Json<EventChanges>,
) -> Result<Response, AppError> {
    let event = state.workflow.update_event(event_id, &actor, changes)?;
    Ok(success(event, "Event updated"))
}

pub async fn work_queue(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Response, AppError> {
    let events = state.queries.work_queue(&actor)?;
    Ok(success(events, "Work queue retrieved"))
}

pub async fn submit_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = state.workflow.submit_event(event_id, &actor)?;
    Ok(success(event, "Event submitted for approval"))
}

pub async fn verify_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    OptionalJson(body): OptionalJson<CommentBody>,
) -> Result<Response, AppError> {
    let event = state
        .workflow
        .verify_event(event_id, &actor, body.comment.as_deref())?;
    Ok(success(event, "Event verified"))
}

pub async fn send_back_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    OptionalJson(body): OptionalJson<ReasonBody>,
) -> Result<Response, AppError> {
    let event = state.workflow.send_back_event(event_id, &actor, &body.reason)?;
    Ok(success(event, "Event sent back for revision"))
}

pub async fn approve_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    OptionalJson(body): OptionalJson<CommentBody>,
) -> Result<Response, AppError> {
    let event = state
        .workflow
        .approve_event(event_id, &actor, body.comment.as_deref())?;
    Ok(success(event, "Event approved"))
}

pub async fn reject_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
    OptionalJson(body): OptionalJson<ReasonBody>,
) -> Result<Response, AppError> {
    let event = state.workflow.reject_event(event_id, &actor, &body.reason)?;
    Ok(success(event, "Event rejected"))
}

pub async fn resubmit_event(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(event_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = state.workflow.resubmit_event(event_id, &actor)?;
    Ok(success(event, "Event reopened for revision"))
}
