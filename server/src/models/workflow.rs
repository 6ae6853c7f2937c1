use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::audit::AuditAction;
use super::event::EventStatus;
use super::role::{Permission, Role};
use super::user::Actor;

/// A role-gated move between two event statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Submit,
    Verify,
    SendBack,
    Approve,
    Reject,
    Resubmit,
}

impl Transition {
    pub const ALL: [Transition; 6] = [
        Transition::Submit,
        Transition::Verify,
        Transition::SendBack,
        Transition::Approve,
        Transition::Reject,
        Transition::Resubmit,
    ];

    pub fn source(&self) -> EventStatus {
        match self {
            Transition::Submit => EventStatus::Draft,
            Transition::Verify | Transition::SendBack => EventStatus::Submitted,
            Transition::Approve | Transition::Reject => EventStatus::Verified,
            Transition::Resubmit => EventStatus::Rejected,
        }
    }

    pub fn target(&self) -> EventStatus {
        match self {
            Transition::Submit => EventStatus::Submitted,
            Transition::Verify => EventStatus::Verified,
            Transition::SendBack | Transition::Resubmit => EventStatus::Draft,
            Transition::Approve => EventStatus::Approved,
            Transition::Reject => EventStatus::Rejected,
        }
    }

    /// Permission an actor's role must grant to trigger the transition.
    pub fn permission(&self) -> Permission {
        match self {
            Transition::Submit | Transition::Resubmit => Permission::SubmitEvent,
            Transition::Verify | Transition::SendBack => Permission::VerifyEvent,
            Transition::Approve | Transition::Reject => Permission::ApproveEvent,
        }
    }

    /// Only the event's creator may trigger these.
    pub fn requires_creator(&self) -> bool {
        matches!(self, Transition::Submit | Transition::Resubmit)
    }

    /// A non-empty reason must accompany these.
    pub fn requires_note(&self) -> bool {
        matches!(self, Transition::SendBack | Transition::Reject)
    }

    /// The authority must be in scope for the event's club department.
    pub fn requires_department_scope(&self) -> bool {
        matches!(self, Transition::Approve)
    }

    pub fn audit_action(&self) -> AuditAction {
        match self {
            Transition::Submit => AuditAction::SubmitEvent,
            Transition::Verify => AuditAction::VerifyEvent,
            Transition::SendBack => AuditAction::ReviseEvent,
            Transition::Approve => AuditAction::ApproveEvent,
            Transition::Reject => AuditAction::RejectEvent,
            Transition::Resubmit => AuditAction::ResubmitEvent,
        }
    }

    pub fn describe(&self, title: &str) -> String {
        match self {
            Transition::Submit => format!("Submitted event for approval: {}", title),
            Transition::Verify => format!("Verified event: {}", title),
            Transition::SendBack => format!("Sent event back for revision: {}", title),
            Transition::Approve => format!("Approved event: {}", title),
            Transition::Reject => format!("Rejected event: {}", title),
            Transition::Resubmit => format!("Reopened rejected event for revision: {}", title),
        }
    }

    /// Transitions leaving `status`.
    pub fn from_status(status: EventStatus) -> impl Iterator<Item = Transition> {
        Self::ALL.into_iter().filter(move |t| t.source() == status)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::Submit => "submit",
            Transition::Verify => "verify",
            Transition::SendBack => "send back",
            Transition::Approve => "approve",
            Transition::Reject => "reject",
            Transition::Resubmit => "resubmit",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowComment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_role: Role,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalWorkflow {
    pub id: Uuid,
    pub event_id: Uuid,
    status: EventStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub submitted_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<Uuid>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub rejected_by: Option<Uuid>,
    pub rejection_reason: Option<String>,
    comments: Vec<WorkflowComment>,
}

impl ApprovalWorkflow {
    pub fn new(event_id: Uuid) -> Self {
        Self::with_status(event_id, EventStatus::Draft)
    }

    /// A workflow already sitting at `status`, for events loaded from
    /// elsewhere. The store only accepts it next to an event in that status.
    pub fn with_status(event_id: Uuid, status: EventStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            status,
            submitted_at: None,
            submitted_by: None,
            verified_at: None,
            verified_by: None,
            approved_at: None,
            approved_by: None,
            rejected_at: None,
            rejected_by: None,
            rejection_reason: None,
            comments: Vec::new(),
        }
    }

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn comments(&self) -> &[WorkflowComment] {
        &self.comments
    }

    /// Appends to the comment history. Comments are never edited or removed.
    pub fn add_comment(&mut self, actor: &Actor, text: impl Into<String>, at: DateTime<Utc>) {
        self.comments.push(WorkflowComment {
            id: Uuid::new_v4(),
            user_id: actor.id,
            user_name: actor.name.clone(),
            user_role: actor.role,
            comment: text.into(),
            timestamp: at,
        });
    }

    /// Stamps the workflow for a transition that has already been validated.
    /// Earlier stamps are kept as history; resubmission only moves the status.
    pub fn record(
        &mut self,
        transition: Transition,
        actor: &Actor,
        note: Option<String>,
        at: DateTime<Utc>,
    ) {
        self.status = transition.target();

        match transition {
            Transition::Submit => {
                self.submitted_at = Some(at);
                self.submitted_by = Some(actor.id);
            }
            Transition::Verify => {
                self.verified_at = Some(at);
                self.verified_by = Some(actor.id);
            }
            Transition::Approve => {
                self.approved_at = Some(at);
                self.approved_by = Some(actor.id);
            }
            Transition::Reject => {
                self.rejected_at = Some(at);
                self.rejected_by = Some(actor.id);
                self.rejection_reason = note.clone();
            }
            Transition::SendBack | Transition::Resubmit => {}
        }

        if let Some(text) = note {
            self.add_comment(actor, text, at);
        }
    }
}
