use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub student_id: Uuid,
    pub student_name: String,
    pub registered_at: DateTime<Utc>,
    pub attended: bool,
}
