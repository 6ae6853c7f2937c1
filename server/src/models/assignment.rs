use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Accepted,
    Completed,
}

impl AssignmentStatus {
    /// The only status reachable from this one.
    pub fn next(&self) -> Option<AssignmentStatus> {
        match self {
            AssignmentStatus::Pending => Some(AssignmentStatus::Accepted),
            AssignmentStatus::Accepted => Some(AssignmentStatus::Completed),
            AssignmentStatus::Completed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Accepted => "accepted",
            AssignmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerAssignment {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub volunteer_id: Uuid,
    pub volunteer_name: String,
    pub task: String,
    pub status: AssignmentStatus,
    pub assigned_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chain_is_linear() {
        assert_eq!(AssignmentStatus::Pending.next(), Some(AssignmentStatus::Accepted));
        assert_eq!(AssignmentStatus::Accepted.next(), Some(AssignmentStatus::Completed));
        assert_eq!(AssignmentStatus::Completed.next(), None);
    }
}
