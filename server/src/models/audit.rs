use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;
use super::user::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    CreateEvent,
    UpdateEvent,
    SubmitEvent,
    VerifyEvent,
    ReviseEvent,
    ApproveEvent,
    RejectEvent,
    ResubmitEvent,
    AssignVolunteer,
    AcceptAssignment,
    CompleteAssignment,
    RegisterEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Event,
    User,
    Club,
    Approval,
    Assignment,
    Registration,
}

/// Immutable record of something an actor did. Fields are read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    id: Uuid,
    user_id: Uuid,
    user_name: String,
    user_role: Role,
    action: AuditAction,
    entity_type: EntityType,
    entity_id: Uuid,
    details: String,
    timestamp: DateTime<Utc>,
    ip_address: Option<String>,
}

impl AuditLog {
    pub fn new(
        actor: &Actor,
        action: AuditAction,
        entity_type: EntityType,
        entity_id: Uuid,
        details: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: actor.id,
            user_name: actor.name.clone(),
            user_role: actor.role,
            action,
            entity_type,
            entity_id,
            details: details.into(),
            timestamp,
            ip_address: actor.ip_address.clone(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn user_role(&self) -> Role {
        self.user_role
    }

    pub fn action(&self) -> AuditAction {
        self.action
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn entity_id(&self) -> Uuid {
        self.entity_id
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_codes() {
        assert_eq!(
            serde_json::to_string(&AuditAction::SubmitEvent).unwrap(),
            "\"SUBMIT_EVENT\""
        );
        assert_eq!(
            serde_json::to_string(&AuditAction::ReviseEvent).unwrap(),
            "\"REVISE_EVENT\""
        );
    }

    #[test]
    fn test_entry_copies_actor_identity() {
        let actor = Actor {
            id: Uuid::new_v4(),
            name: "Mike Organizer".to_string(),
            role: Role::EventOrganizer,
            department: Some("Events".to_string()),
            authority_type: None,
            ip_address: Some("192.168.1.15".to_string()),
        };
        let entity = Uuid::new_v4();
        let entry = AuditLog::new(
            &actor,
            AuditAction::VerifyEvent,
            EntityType::Event,
            entity,
            "Verified event: Robotics Expo",
            Utc::now(),
        );

        assert_eq!(entry.user_id(), actor.id);
        assert_eq!(entry.user_role(), Role::EventOrganizer);
        assert_eq!(entry.entity_id(), entity);
        assert_eq!(entry.ip_address(), Some("192.168.1.15"));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "VERIFY_EVENT");
        assert_eq!(json["entity_type"], "event");
    }
}
