//! In-memory entity store shared by the workflow engine, the assignment and
//! registration managers and the query layer.
//!
//! Every operation runs inside a single [`EntityStore::write`] or
//! [`EntityStore::read`] call. Writers are exclusive, so "check the current
//! state, then mutate" is atomic for every entity, and readers always see a
//! snapshot where an event and its workflow agree. Write closures must finish
//! all of their checks before touching any table.

pub mod seed;

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Actor, ApprovalWorkflow, AuditLog, Club, Event, EventChanges, EventRegistration, Transition,
    User, VolunteerAssignment,
};
use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct Tables {
    pub users: HashMap<Uuid, User>,
    pub clubs: HashMap<Uuid, Club>,
    events: HashMap<Uuid, Event>,
    /// Keyed by event id.
    workflows: HashMap<Uuid, ApprovalWorkflow>,
    pub assignments: HashMap<Uuid, VolunteerAssignment>,
    pub registrations: HashMap<Uuid, EventRegistration>,
    audit_log: Vec<AuditLog>,
}

impl Tables {
    /// Audit entries in insertion order.
    pub fn audit_log(&self) -> &[AuditLog] {
        &self.audit_log
    }

    pub fn append_audit(&mut self, entry: AuditLog) {
        self.audit_log.push(entry);
    }

    pub fn user(&self, id: Uuid) -> AppResult<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("User '{}' was not found", id)))
    }

    pub fn club(&self, id: Uuid) -> AppResult<&Club> {
        self.clubs
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Club '{}' was not found", id)))
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn event(&self, id: Uuid) -> AppResult<&Event> {
        self.events
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Event '{}' was not found", id)))
    }

    /// An existing event without a workflow means the store is corrupt.
    pub fn workflow(&self, event_id: Uuid) -> AppResult<&ApprovalWorkflow> {
        self.workflows.get(&event_id).ok_or_else(|| {
            AppError::InternalServerError(format!("Event '{}' has no approval workflow", event_id))
        })
    }

    pub fn assignment(&self, id: Uuid) -> AppResult<&VolunteerAssignment> {
        self.assignments
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Assignment '{}' was not found", id)))
    }

    pub fn registration(&self, id: Uuid) -> AppResult<&EventRegistration> {
        self.registrations
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Registration '{}' was not found", id)))
    }

    /// Inserts an event together with its workflow. Both must agree on id
    /// and status.
    pub fn insert_event(&mut self, event: Event, workflow: ApprovalWorkflow) -> AppResult<()> {
        if event.id != workflow.event_id || event.status != workflow.status() {
            return Err(AppError::InternalServerError(format!(
                "Workflow for event '{}' does not match it ({} vs {})",
                event.id,
                event.status,
                workflow.status()
            )));
        }
        self.workflows.insert(event.id, workflow);
        self.events.insert(event.id, event);
        Ok(())
    }

    /// Applies descriptive edits. Status is never touched here.
    pub fn edit_event(
        &mut self,
        id: Uuid,
        changes: EventChanges,
        at: DateTime<Utc>,
    ) -> AppResult<Event> {
        let event = self
            .events
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Event '{}' was not found", id)))?;
        changes.apply_to(event);
        event.updated_at = at;
        Ok(event.clone())
    }

    /// Moves an event and its workflow to the transition's target together.
    /// The caller has already validated the transition.
    pub fn transition_event(
        &mut self,
        id: Uuid,
        transition: Transition,
        actor: &Actor,
        note: Option<String>,
        at: DateTime<Utc>,
    ) -> AppResult<Event> {
        let (Some(event), Some(workflow)) = (self.events.get_mut(&id), self.workflows.get_mut(&id))
        else {
            return Err(AppError::InternalServerError(format!(
                "Event '{}' vanished during {}",
                id, transition
            )));
        };

        event.status = transition.target();
        event.updated_at = at;
        workflow.record(transition, actor, note, at);
        Ok(event.clone())
    }
}

#[derive(Debug, Default)]
pub struct EntityStore {
    tables: RwLock<Tables>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against a consistent snapshot of every table.
    pub fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> AppResult<R> {
        let tables = self
            .tables
            .read()
            .map_err(|_| AppError::InternalServerError("entity store lock poisoned".to_string()))?;
        Ok(f(&tables))
    }

    /// Runs `f` with exclusive access to every table.
    pub fn write<R>(&self, f: impl FnOnce(&mut Tables) -> AppResult<R>) -> AppResult<R> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| AppError::InternalServerError("entity store lock poisoned".to_string()))?;
        f(&mut tables)
    }

    pub fn insert_user(&self, user: User) -> AppResult<()> {
        self.write(|t| {
            t.users.insert(user.id, user);
            Ok(())
        })
    }

    pub fn insert_club(&self, club: Club) -> AppResult<()> {
        self.write(|t| {
            t.clubs.insert(club.id, club);
            Ok(())
        })
    }

    pub fn find_user(&self, id: Uuid) -> AppResult<User> {
        self.read(|t| t.user(id).cloned())?
    }
}
