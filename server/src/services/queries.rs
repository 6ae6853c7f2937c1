//! Read-only views derived from the entity store on demand.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::access::authority_in_scope;
use crate::models::{
    Actor, ApprovalWorkflow, AssignmentStatus, AuditLog, Club, Event, EventFilter,
    EventRegistration, EventStatus, Role, VolunteerAssignment,
};
use crate::store::{EntityStore, Tables};
use crate::utils::error::AppResult;

#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    pub event: Event,
    pub workflow: ApprovalWorkflow,
    pub club: Club,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformStats {
    pub events_by_status: BTreeMap<EventStatus, usize>,
    pub users_by_role: BTreeMap<Role, usize>,
    pub total_clubs: usize,
}

/// Headline numbers for an actor's dashboard. Only the fields relevant to
/// the actor's role are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_clubs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_students: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_approvals: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_registrations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attended_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_tasks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_tasks: Option<usize>,
}

#[derive(Clone)]
pub struct QueryService {
    store: Arc<EntityStore>,
}

impl QueryService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn get_event(&self, event_id: Uuid) -> AppResult<EventDetail> {
        self.store.read(|t| {
            let event = t.event(event_id)?;
            Ok(EventDetail {
                event: event.clone(),
                workflow: t.workflow(event_id)?.clone(),
                club: t.club(event.club_id)?.clone(),
            })
        })?
    }

    /// Matching events, newest first.
    pub fn query_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>> {
        debug!(?filter, "Querying events");
        self.store
            .read(|t| newest_first(t.events().filter(|e| filter.matches(e))))
    }

    pub fn events_created_by(&self, user_id: Uuid) -> AppResult<Vec<Event>> {
        self.query_events(&EventFilter {
            created_by: Some(user_id),
            ..Default::default()
        })
    }

    pub fn assignments_for_volunteer(
        &self,
        volunteer_id: Uuid,
    ) -> AppResult<Vec<VolunteerAssignment>> {
        self.store.read(|t| {
            let mut items: Vec<_> = t
                .assignments
                .values()
                .filter(|a| a.volunteer_id == volunteer_id)
                .cloned()
                .collect();
            items.sort_by(|a, b| b.assigned_at.cmp(&a.assigned_at).then(a.id.cmp(&b.id)));
            items
        })
    }

    pub fn registrations_for_student(&self, student_id: Uuid) -> AppResult<Vec<EventRegistration>> {
        self.store.read(|t| {
            let mut items: Vec<_> = t
                .registrations
                .values()
                .filter(|r| r.student_id == student_id)
                .cloned()
                .collect();
            items.sort_by(|a, b| b.registered_at.cmp(&a.registered_at).then(a.id.cmp(&b.id)));
            items
        })
    }

    /// Every status is present, zero when no event holds it.
    pub fn count_by_status(&self) -> AppResult<BTreeMap<EventStatus, usize>> {
        self.store.read(status_counts)
    }

    pub fn count_by_role(&self) -> AppResult<BTreeMap<Role, usize>> {
        self.store.read(role_counts)
    }

    pub fn platform_stats(&self) -> AppResult<PlatformStats> {
        self.store.read(|t| PlatformStats {
            events_by_status: status_counts(t),
            users_by_role: role_counts(t),
            total_clubs: t.clubs.len(),
        })
    }

    /// Audit entries, most recent first. Entries sharing a timestamp keep
    /// later insertions ahead of earlier ones.
    pub fn list_audit_log(&self, limit: usize, offset: usize) -> AppResult<Vec<AuditLog>> {
        self.store.read(|t| {
            let mut indexed: Vec<(usize, &AuditLog)> = t.audit_log().iter().enumerate().collect();
            indexed.sort_by(|(ia, a), (ib, b)| {
                b.timestamp().cmp(&a.timestamp()).then(ib.cmp(ia))
            });
            indexed
                .into_iter()
                .skip(offset)
                .take(limit)
                .map(|(_, entry)| entry.clone())
                .collect()
        })
    }

    pub fn recent_audit(&self, limit: usize) -> AppResult<Vec<AuditLog>> {
        self.list_audit_log(limit, 0)
    }

    /// Events waiting on this actor.
    pub fn work_queue(&self, actor: &Actor) -> AppResult<Vec<Event>> {
        self.store.read(|t| {
            let events = t.events().filter(|e| match actor.role {
                Role::EventOrganizer => e.status == EventStatus::Submitted,
                Role::Authority => {
                    e.status == EventStatus::Verified
                        && t.clubs
                            .get(&e.club_id)
                            .is_some_and(|club| authority_in_scope(actor, club))
                }
                Role::ClubHead => e.created_by == actor.id && e.status.is_editable(),
                _ => false,
            });
            newest_first(events)
        })
    }

    pub fn dashboard(&self, actor: &Actor) -> AppResult<DashboardStats> {
        self.store.read(|t| dashboard_for(t, actor))
    }
}

fn newest_first<'a>(events: impl Iterator<Item = &'a Event>) -> Vec<Event> {
    let mut items: Vec<Event> = events.cloned().collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    items
}

fn status_counts(t: &Tables) -> BTreeMap<EventStatus, usize> {
    let mut counts: BTreeMap<EventStatus, usize> =
        EventStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for event in t.events() {
        *counts.entry(event.status).or_default() += 1;
    }
    counts
}

fn role_counts(t: &Tables) -> BTreeMap<Role, usize> {
    let mut counts: BTreeMap<Role, usize> = Role::ALL.into_iter().map(|r| (r, 0)).collect();
    for user in t.users.values() {
        *counts.entry(user.role).or_default() += 1;
    }
    counts
}

fn dashboard_for(t: &Tables, actor: &Actor) -> DashboardStats {
    let count = |pred: &dyn Fn(&Event) -> bool| t.events().filter(|&e| pred(e)).count();

    match actor.role {
        Role::Admin => DashboardStats {
            total_users: Some(t.users.len()),
            total_events: Some(t.event_count()),
            total_clubs: Some(t.clubs.len()),
            total_students: Some(
                t.users.values().filter(|u| u.role == Role::Student).count(),
            ),
            pending_approvals: Some(count(&|e| e.status.is_pending())),
            approved_events: Some(count(&|e| e.status == EventStatus::Approved)),
            ..Default::default()
        },
        Role::ClubHead => {
            let mine = |e: &Event| e.created_by == actor.id;
            DashboardStats {
                total_events: Some(count(&|e| mine(e))),
                draft_events: Some(count(&|e| mine(e) && e.status == EventStatus::Draft)),
                pending_approvals: Some(count(&|e| mine(e) && e.status.is_pending())),
                approved_events: Some(count(&|e| mine(e) && e.status == EventStatus::Approved)),
                rejected_events: Some(count(&|e| mine(e) && e.status == EventStatus::Rejected)),
                ..Default::default()
            }
        }
        Role::EventOrganizer => DashboardStats {
            pending_approvals: Some(count(&|e| e.status == EventStatus::Submitted)),
            verified_events: Some(count(&|e| e.status == EventStatus::Verified)),
            total_events: Some(count(&|e| e.status != EventStatus::Draft)),
            ..Default::default()
        },
        Role::Authority => {
            let in_scope = |e: &Event| {
                t.clubs
                    .get(&e.club_id)
                    .is_some_and(|club| authority_in_scope(actor, club))
            };
            let approved = count(&|e| e.status == EventStatus::Approved);
            let rejected = count(&|e| e.status == EventStatus::Rejected);
            DashboardStats {
                pending_approvals: Some(count(&|e| {
                    e.status == EventStatus::Verified && in_scope(e)
                })),
                approved_events: Some(approved),
                rejected_events: Some(rejected),
                total_events: Some(approved + rejected),
                ..Default::default()
            }
        }
        Role::Student => {
            let mine: Vec<_> = t
                .registrations
                .values()
                .filter(|r| r.student_id == actor.id)
                .collect();
            DashboardStats {
                upcoming_events: Some(count(&|e| e.status == EventStatus::Approved)),
                my_registrations: Some(mine.len()),
                attended_events: Some(mine.iter().filter(|r| r.attended).count()),
                ..Default::default()
            }
        }
        Role::Volunteer => {
            let mine: Vec<_> = t
                .assignments
                .values()
                .filter(|a| a.volunteer_id == actor.id)
                .collect();
            let with = |s: AssignmentStatus| mine.iter().filter(|a| a.status == s).count();
            DashboardStats {
                assigned_tasks: Some(mine.len()),
                pending_tasks: Some(with(AssignmentStatus::Pending)),
                accepted_tasks: Some(with(AssignmentStatus::Accepted)),
                completed_tasks: Some(with(AssignmentStatus::Completed)),
                ..Default::default()
            }
        }
    }
}
