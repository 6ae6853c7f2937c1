use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::access::require_permission;
use crate::models::{
    Actor, AuditAction, AuditLog, EntityType, EventRegistration, EventStatus, Permission, Role,
};
use crate::store::EntityStore;
use crate::utils::error::{AppError, AppResult};

#[derive(Clone)]
pub struct RegistrationManager {
    store: Arc<EntityStore>,
}

impl RegistrationManager {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// Registers a student for an APPROVED event. Students register
    /// themselves; admins may register on a student's behalf.
    pub fn register_student(
        &self,
        event_id: Uuid,
        student_id: Uuid,
        actor: &Actor,
    ) -> AppResult<EventRegistration> {
        require_permission(actor, Permission::RegisterForEvents)?;
        if actor.role != Role::Admin && actor.id != student_id {
            return Err(AppError::Forbidden(
                "Students may only register themselves".to_string(),
            ));
        }

        let registration = self.store.write(|t| {
            let event = t.event(event_id)?;
            let student = t.user(student_id)?;
            if student.role != Role::Student {
                return Err(AppError::ValidationError(format!(
                    "User '{}' is not a student",
                    student_id
                )));
            }
            if event.status != EventStatus::Approved {
                return Err(AppError::ValidationError(format!(
                    "Event '{}' is {} and not open for registration",
                    event_id, event.status
                )));
            }
            let duplicate = t
                .registrations
                .values()
                .any(|r| r.event_id == event_id && r.student_id == student_id);
            if duplicate {
                return Err(AppError::ValidationError(format!(
                    "Student '{}' is already registered for event '{}'",
                    student_id, event_id
                )));
            }

            let now = Utc::now();
            let registration = EventRegistration {
                id: Uuid::new_v4(),
                event_id,
                event_title: event.title.clone(),
                student_id,
                student_name: student.name.clone(),
                registered_at: now,
                attended: false,
            };
            t.registrations.insert(registration.id, registration.clone());
            t.append_audit(AuditLog::new(
                actor,
                AuditAction::RegisterEvent,
                EntityType::Registration,
                registration.id,
                format!(
                    "Registered {} for {}",
                    registration.student_name, registration.event_title
                ),
                now,
            ));
            Ok(registration)
        })?;

        info!(
            registration_id = %registration.id,
            %event_id,
            %student_id,
            "Student registered"
        );
        Ok(registration)
    }

    /// Records check-in. Independent of the event's status; repeating it is a no-op.
    pub fn mark_attended(&self, registration_id: Uuid) -> AppResult<EventRegistration> {
        self.store.write(|t| {
            let registration = t.registrations.get_mut(&registration_id).ok_or_else(|| {
                AppError::NotFound(format!("Registration '{}' was not found", registration_id))
            })?;

            if registration.attended {
                debug!(%registration_id, "Attendance already recorded");
            } else {
                registration.attended = true;
                info!(%registration_id, "Attendance recorded");
            }
            Ok(registration.clone())
        })
    }
}
