//! Approval workflow state machine.
//!
//! Each operation validates the actor and the event's current status and then
//! mutates the event, its workflow and the audit log in one exclusive store
//! write. A rejected operation leaves every table untouched.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::access::{authority_in_scope, require_permission};
use crate::models::{
    Actor, ApprovalWorkflow, AuditAction, AuditLog, EntityType, Event, EventChanges, EventStatus,
    NewEvent, Permission, Transition,
};
use crate::store::{EntityStore, Tables};
use crate::utils::error::{AppError, AppResult};
use crate::utils::non_blank;

#[derive(Clone)]
pub struct WorkflowEngine {
    store: Arc<EntityStore>,
}

impl WorkflowEngine {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// Creates a DRAFT event and its workflow. The actor must head the club.
    pub fn create_event(&self, actor: &Actor, input: NewEvent) -> AppResult<Event> {
        require_permission(actor, Permission::CreateEvent)?;
        input.validate()?;

        let event = self.store.write(|t| {
            let club = t.club(input.club_id)?;
            if !club.is_led_by(actor.id) {
                return Err(AppError::Forbidden(format!(
                    "Only the head of {} may create its events",
                    club.name
                )));
            }

            let now = Utc::now();
            let event = Event {
                id: Uuid::new_v4(),
                title: input.title.trim().to_string(),
                description: input.description,
                club_id: club.id,
                club_name: club.name.clone(),
                created_by: actor.id,
                creator_name: actor.name.clone(),
                event_date: input.event_date,
                event_time: input.event_time,
                venue: input.venue.trim().to_string(),
                expected_attendees: input.expected_attendees,
                budget: input.budget,
                status: EventStatus::Draft,
                category: input.category.trim().to_string(),
                requirements: input.requirements,
                created_at: now,
                updated_at: now,
            };

            t.insert_event(event.clone(), ApprovalWorkflow::new(event.id))?;
            t.append_audit(AuditLog::new(
                actor,
                AuditAction::CreateEvent,
                EntityType::Event,
                event.id,
                format!("Created event: {}", event.title),
                now,
            ));
            Ok(event)
        })?;

        info!(event_id = %event.id, actor = %actor.id, "Event created");
        Ok(event)
    }

    /// Edits a DRAFT or REJECTED event. Creator only.
    pub fn update_event(
        &self,
        event_id: Uuid,
        actor: &Actor,
        changes: EventChanges,
    ) -> AppResult<Event> {
        if changes.is_empty() {
            return Err(AppError::ValidationError("No changes supplied".to_string()));
        }
        changes.validate()?;

        let event = self.store.write(|t| {
            let current = t.event(event_id)?;
            if current.created_by != actor.id {
                return Err(AppError::Forbidden(
                    "Only the event's creator may edit it".to_string(),
                ));
            }
            if !current.status.is_editable() {
                return Err(AppError::InvalidTransition(format!(
                    "Event '{}' is {} and can no longer be edited",
                    event_id, current.status
                )));
            }

            let now = Utc::now();
            let event = t.edit_event(event_id, changes, now)?;

            t.append_audit(AuditLog::new(
                actor,
                AuditAction::UpdateEvent,
                EntityType::Event,
                event_id,
                format!("Updated event: {}", event.title),
                now,
            ));
            Ok(event)
        })?;

        info!(%event_id, actor = %actor.id, "Event updated");
        Ok(event)
    }

    pub fn submit_event(&self, event_id: Uuid, actor: &Actor) -> AppResult<Event> {
        self.apply(Transition::Submit, event_id, actor, None)
    }

    pub fn verify_event(
        &self,
        event_id: Uuid,
        actor: &Actor,
        comment: Option<&str>,
    ) -> AppResult<Event> {
        self.apply(Transition::Verify, event_id, actor, comment)
    }

    pub fn send_back_event(&self, event_id: Uuid, actor: &Actor, reason: &str) -> AppResult<Event> {
        self.apply(Transition::SendBack, event_id, actor, Some(reason))
    }

    pub fn approve_event(
        &self,
        event_id: Uuid,
        actor: &Actor,
        comment: Option<&str>,
    ) -> AppResult<Event> {
        self.apply(Transition::Approve, event_id, actor, comment)
    }

    pub fn reject_event(&self, event_id: Uuid, actor: &Actor, reason: &str) -> AppResult<Event> {
        self.apply(Transition::Reject, event_id, actor, Some(reason))
    }

    pub fn resubmit_event(&self, event_id: Uuid, actor: &Actor) -> AppResult<Event> {
        self.apply(Transition::Resubmit, event_id, actor, None)
    }

    /// Runs one transition. Checks happen in this order: the event exists,
    /// the actor may perform the transition, a required note is present, the
    /// event is in the transition's source status.
    pub fn apply(
        &self,
        transition: Transition,
        event_id: Uuid,
        actor: &Actor,
        note: Option<&str>,
    ) -> AppResult<Event> {
        let note = non_blank(note);

        let event = self.store.write(|t| {
            let current = t.event(event_id)?;
            authorize(t, transition, current, actor)?;

            if transition.requires_note() && note.is_none() {
                return Err(AppError::ValidationError(format!(
                    "A reason is required to {} an event",
                    transition
                )));
            }
            if current.status != transition.source() {
                return Err(AppError::InvalidTransition(format!(
                    "Cannot {} event '{}': status is {}, expected {}",
                    transition,
                    event_id,
                    current.status,
                    transition.source()
                )));
            }

            let now = Utc::now();
            let event = t.transition_event(event_id, transition, actor, note, now)?;

            t.append_audit(AuditLog::new(
                actor,
                transition.audit_action(),
                EntityType::Event,
                event_id,
                transition.describe(&event.title),
                now,
            ));
            Ok(event)
        })?;

        info!(
            %event_id,
            actor = %actor.id,
            transition = %transition,
            status = %event.status,
            "Event transition applied"
        );
        Ok(event)
    }
}

fn authorize(t: &Tables, transition: Transition, event: &Event, actor: &Actor) -> AppResult<()> {
    require_permission(actor, transition.permission())?;

    if transition.requires_creator() && event.created_by != actor.id {
        return Err(AppError::Forbidden(format!(
            "Only the event's creator may {} it",
            transition
        )));
    }

    if transition.requires_department_scope() {
        let club = t.club(event.club_id)?;
        if !authority_in_scope(actor, club) {
            return Err(AppError::Forbidden(format!(
                "Authority is not in scope for the {} department",
                club.department
            )));
        }
    }

    Ok(())
}
