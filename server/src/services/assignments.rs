use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::access::require_permission;
use crate::models::{
    Actor, AssignmentStatus, AuditAction, AuditLog, EntityType, Permission, Role,
    VolunteerAssignment,
};
use crate::store::EntityStore;
use crate::utils::error::{AppError, AppResult};

/// Volunteer task lifecycle: pending -> accepted -> completed.
///
/// Assignments may be created against an event in any status.
#[derive(Clone)]
pub struct AssignmentManager {
    store: Arc<EntityStore>,
}

impl AssignmentManager {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn assign_volunteer(
        &self,
        event_id: Uuid,
        volunteer_id: Uuid,
        task: &str,
        actor: &Actor,
    ) -> AppResult<VolunteerAssignment> {
        require_permission(actor, Permission::AssignVolunteers)?;
        let task = task.trim();
        if task.is_empty() {
            return Err(AppError::ValidationError("task must not be empty".to_string()));
        }

        let assignment = self.store.write(|t| {
            let event = t.event(event_id)?;
            let volunteer = t.user(volunteer_id)?;
            if volunteer.role != Role::Volunteer {
                return Err(AppError::ValidationError(format!(
                    "User '{}' is not a volunteer",
                    volunteer_id
                )));
            }

            let now = Utc::now();
            let assignment = VolunteerAssignment {
                id: Uuid::new_v4(),
                event_id,
                event_title: event.title.clone(),
                volunteer_id,
                volunteer_name: volunteer.name.clone(),
                task: task.to_string(),
                status: AssignmentStatus::Pending,
                assigned_at: now,
            };
            t.assignments.insert(assignment.id, assignment.clone());
            t.append_audit(AuditLog::new(
                actor,
                AuditAction::AssignVolunteer,
                EntityType::Assignment,
                assignment.id,
                format!(
                    "Assigned {} to '{}' for {}",
                    assignment.volunteer_name, assignment.task, assignment.event_title
                ),
                now,
            ));
            Ok(assignment)
        })?;

        info!(
            assignment_id = %assignment.id,
            %event_id,
            %volunteer_id,
            "Volunteer assigned"
        );
        Ok(assignment)
    }

    pub fn accept_assignment(
        &self,
        assignment_id: Uuid,
        actor: &Actor,
    ) -> AppResult<VolunteerAssignment> {
        self.advance(assignment_id, actor, AssignmentStatus::Accepted)
    }

    pub fn complete_assignment(
        &self,
        assignment_id: Uuid,
        actor: &Actor,
    ) -> AppResult<VolunteerAssignment> {
        self.advance(assignment_id, actor, AssignmentStatus::Completed)
    }

    /// Moves an assignment one step along its chain. Only the assignee may.
    fn advance(
        &self,
        assignment_id: Uuid,
        actor: &Actor,
        to: AssignmentStatus,
    ) -> AppResult<VolunteerAssignment> {
        require_permission(actor, Permission::WorkAssignments)?;

        let assignment = self.store.write(|t| {
            let current = t.assignment(assignment_id)?;
            if current.volunteer_id != actor.id {
                return Err(AppError::Forbidden(
                    "Only the assigned volunteer may update this task".to_string(),
                ));
            }
            if current.status.next() != Some(to) {
                return Err(AppError::InvalidTransition(format!(
                    "Assignment '{}' is {} and cannot become {}",
                    assignment_id, current.status, to
                )));
            }

            let now = Utc::now();
            let assignment = t.assignments.get_mut(&assignment_id).ok_or_else(|| {
                AppError::NotFound(format!("Assignment '{}' was not found", assignment_id))
            })?;
            assignment.status = to;
            let assignment = assignment.clone();

            let (action, verb) = match to {
                AssignmentStatus::Completed => (AuditAction::CompleteAssignment, "Completed"),
                _ => (AuditAction::AcceptAssignment, "Accepted"),
            };
            t.append_audit(AuditLog::new(
                actor,
                action,
                EntityType::Assignment,
                assignment_id,
                format!("{} task '{}' for {}", verb, assignment.task, assignment.event_title),
                now,
            ));
            Ok(assignment)
        })?;

        info!(%assignment_id, status = %to, "Assignment advanced");
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::*;

    fn setup() -> (AssignmentManager, Arc<EntityStore>) {
        let store = Arc::new(demo_store().unwrap());
        (AssignmentManager::new(store.clone()), store)
    }

    fn actor(store: &EntityStore, id: Uuid) -> Actor {
        Actor::from(&store.find_user(id).unwrap())
    }

    #[test]
    fn test_assignment_lifecycle() {
        let (manager, store) = setup();
        let organizer = actor(&store, ORGANIZER_ID);
        let volunteer = actor(&store, VOLUNTEER_ID);

        let assignment = manager
            .assign_volunteer(TECH_FEST_ID, VOLUNTEER_ID, "Hall setup", &organizer)
            .unwrap();
        assert_eq!(assignment.status, AssignmentStatus::Pending);
        assert_eq!(assignment.event_title, "Annual Tech Fest 2026");

        let accepted = manager.accept_assignment(assignment.id, &volunteer).unwrap();
        assert_eq!(accepted.status, AssignmentStatus::Accepted);

        let completed = manager.complete_assignment(assignment.id, &volunteer).unwrap();
        assert_eq!(completed.status, AssignmentStatus::Completed);

        assert!(matches!(
            manager.complete_assignment(assignment.id, &volunteer),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_complete_while_pending_is_invalid() {
        let (manager, store) = setup();
        let volunteer = actor(&store, VOLUNTEER_ID);

        let result = manager.complete_assignment(STAGE_ASSIGNMENT_ID, &volunteer);
        assert!(matches!(result, Err(AppError::InvalidTransition(_))));
        let status = store
            .read(|t| t.assignment(STAGE_ASSIGNMENT_ID).unwrap().status)
            .unwrap();
        assert_eq!(status, AssignmentStatus::Pending);
    }

    #[test]
    fn test_accept_twice_is_invalid() {
        let (manager, store) = setup();
        let volunteer = actor(&store, VOLUNTEER_ID);

        assert!(matches!(
            manager.accept_assignment(DESK_ASSIGNMENT_ID, &volunteer),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_only_assignee_may_accept() {
        let (manager, store) = setup();
        let organizer = actor(&store, ORGANIZER_ID);
        let mut other_volunteer = actor(&store, VOLUNTEER_ID);
        other_volunteer.id = Uuid::new_v4();

        assert!(matches!(
            manager.accept_assignment(STAGE_ASSIGNMENT_ID, &organizer),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            manager.accept_assignment(STAGE_ASSIGNMENT_ID, &other_volunteer),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_assign_validates_inputs() {
        let (manager, store) = setup();
        let organizer = actor(&store, ORGANIZER_ID);
        let student = actor(&store, STUDENT_ID);

        assert!(matches!(
            manager.assign_volunteer(TECH_FEST_ID, VOLUNTEER_ID, "  ", &organizer),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            manager.assign_volunteer(TECH_FEST_ID, STUDENT_ID, "Hall setup", &organizer),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            manager.assign_volunteer(Uuid::new_v4(), VOLUNTEER_ID, "Hall setup", &organizer),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            manager.assign_volunteer(TECH_FEST_ID, VOLUNTEER_ID, "Hall setup", &student),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_assign_allowed_for_draft_events() {
        let (manager, store) = setup();
        let head = actor(&store, CLUB_HEAD_ID);

        let assignment = manager
            .assign_volunteer(BLOCKCHAIN_SEMINAR_ID, VOLUNTEER_ID, "Pre-event outreach", &head)
            .unwrap();
        assert_eq!(assignment.status, AssignmentStatus::Pending);
    }
}
