use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Draft,
    Submitted,
    Verified,
    Approved,
    Rejected,
}

impl EventStatus {
    pub const ALL: [EventStatus; 5] = [
        EventStatus::Draft,
        EventStatus::Submitted,
        EventStatus::Verified,
        EventStatus::Approved,
        EventStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "DRAFT",
            EventStatus::Submitted => "SUBMITTED",
            EventStatus::Verified => "VERIFIED",
            EventStatus::Approved => "APPROVED",
            EventStatus::Rejected => "REJECTED",
        }
    }

    /// Waiting on an organizer or an authority.
    pub fn is_pending(&self) -> bool {
        matches!(self, EventStatus::Submitted | EventStatus::Verified)
    }

    /// Content may still be edited by the creator.
    pub fn is_editable(&self) -> bool {
        matches!(self, EventStatus::Draft | EventStatus::Rejected)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub club_id: Uuid,
    pub club_name: String,
    pub created_by: Uuid,
    pub creator_name: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub expected_attendees: u32,
    pub budget: Decimal,
    pub status: EventStatus,
    pub category: String,
    pub requirements: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a new draft event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub club_id: Uuid,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub expected_attendees: u32,
    pub budget: Decimal,
    pub category: String,
    #[serde(default)]
    pub requirements: String,
}

impl NewEvent {
    pub fn validate(&self) -> AppResult<()> {
        require_text("title", &self.title)?;
        require_text("venue", &self.venue)?;
        require_text("category", &self.category)?;
        require_attendees(self.expected_attendees)?;
        require_budget(self.budget)
    }
}

/// Partial update of an editable event. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub expected_attendees: Option<u32>,
    pub budget: Option<Decimal>,
    pub category: Option<String>,
    pub requirements: Option<String>,
}

impl EventChanges {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(venue) = &self.venue {
            require_text("venue", venue)?;
        }
        if let Some(category) = &self.category {
            require_text("category", category)?;
        }
        if let Some(attendees) = self.expected_attendees {
            require_attendees(attendees)?;
        }
        if let Some(budget) = self.budget {
            require_budget(budget)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.event_date.is_none()
            && self.event_time.is_none()
            && self.venue.is_none()
            && self.expected_attendees.is_none()
            && self.budget.is_none()
            && self.category.is_none()
            && self.requirements.is_none()
    }

    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.event_date {
            event.event_date = date;
        }
        if let Some(time) = self.event_time {
            event.event_time = time;
        }
        if let Some(venue) = self.venue {
            event.venue = venue.trim().to_string();
        }
        if let Some(attendees) = self.expected_attendees {
            event.expected_attendees = attendees;
        }
        if let Some(budget) = self.budget {
            event.budget = budget;
        }
        if let Some(category) = self.category {
            event.category = category.trim().to_string();
        }
        if let Some(requirements) = self.requirements {
            event.requirements = requirements;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub created_by: Option<Uuid>,
    pub club_id: Option<Uuid>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.status.map_or(true, |s| event.status == s)
            && self.created_by.map_or(true, |id| event.created_by == id)
            && self.club_id.map_or(true, |id| event.club_id == id)
    }
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_attendees(value: u32) -> AppResult<()> {
    if value == 0 {
        return Err(AppError::ValidationError(
            "expected_attendees must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn require_budget(value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::ValidationError(
            "budget must not be negative".to_string(),
        ));
    }
    Ok(())
}
