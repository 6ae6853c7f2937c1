use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::{AuthorityType, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub department: Option<String>,
    pub authority_type: Option<AuthorityType>,
    pub club_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Authenticated identity handed to every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub department: Option<String>,
    pub authority_type: Option<AuthorityType>,
    pub ip_address: Option<String>,
}

impl Actor {
    pub fn with_ip(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role,
            department: user.department.clone(),
            authority_type: user.authority_type,
            ip_address: None,
        }
    }
}
