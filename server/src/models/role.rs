use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability tag carried by every actor. One role per actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
    ClubHead,
    EventOrganizer,
    Authority,
    Volunteer,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Student,
        Role::ClubHead,
        Role::EventOrganizer,
        Role::Authority,
        Role::Volunteer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::ClubHead => "club_head",
            Role::EventOrganizer => "event_organizer",
            Role::Authority => "authority",
            Role::Volunteer => "volunteer",
        }
    }

    /// Permissions matrix.
    pub fn can(&self, permission: Permission) -> bool {
        use Permission::*;

        match self {
            Role::Admin => matches!(
                permission,
                AssignVolunteers | RegisterForEvents | RecordAttendance | ViewAuditLog
            ),
            Role::Student => matches!(permission, RegisterForEvents),
            Role::ClubHead => matches!(permission, CreateEvent | SubmitEvent | AssignVolunteers),
            Role::EventOrganizer => matches!(
                permission,
                VerifyEvent | AssignVolunteers | RecordAttendance
            ),
            Role::Authority => matches!(permission, ApproveEvent),
            Role::Volunteer => matches!(permission, WorkAssignments | RecordAttendance),
        }
    }

    /// Landing page for the role, used by the presentation layer.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/dashboard/admin",
            Role::Student => "/dashboard/student",
            Role::ClubHead => "/dashboard/club-head",
            Role::EventOrganizer => "/dashboard/organizer",
            Role::Authority => "/dashboard/authority",
            Role::Volunteer => "/dashboard/volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthorityType {
    Hod,
    Principal,
    Dean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    CreateEvent,
    SubmitEvent,
    VerifyEvent,
    ApproveEvent,
    AssignVolunteers,
    WorkAssignments,
    RegisterForEvents,
    RecordAttendance,
    ViewAuditLog,
}
