use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub head_id: Uuid,
    pub head_name: String,
    pub department: String,
    pub member_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn is_led_by(&self, user_id: Uuid) -> bool {
        self.head_id == user_id
    }
}
