//! Demo directory and event history for development and tests.
//!
//! Ids are fixed so that callers can address the seeded records directly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{EntityStore, Tables};
use crate::models::{
    Actor, ApprovalWorkflow, AssignmentStatus, AuditAction, AuditLog, AuthorityType, Club,
    EntityType, Event, EventRegistration, EventStatus, Role, User, VolunteerAssignment,
};
use crate::utils::error::{AppError, AppResult};

pub const ADMIN_ID: Uuid = Uuid::from_u128(0x1001);
pub const STUDENT_ID: Uuid = Uuid::from_u128(0x1002);
pub const CLUB_HEAD_ID: Uuid = Uuid::from_u128(0x1003);
pub const ORGANIZER_ID: Uuid = Uuid::from_u128(0x1004);
pub const HOD_ID: Uuid = Uuid::from_u128(0x1005);
pub const VOLUNTEER_ID: Uuid = Uuid::from_u128(0x1006);
pub const CULTURAL_HEAD_ID: Uuid = Uuid::from_u128(0x1007);
pub const SPORTS_HEAD_ID: Uuid = Uuid::from_u128(0x1008);

pub const TECH_CLUB_ID: Uuid = Uuid::from_u128(0x2001);
pub const CULTURAL_CLUB_ID: Uuid = Uuid::from_u128(0x2002);
pub const SPORTS_CLUB_ID: Uuid = Uuid::from_u128(0x2003);

/// SUBMITTED
pub const TECH_FEST_ID: Uuid = Uuid::from_u128(0x3001);
/// APPROVED
pub const ML_WORKSHOP_ID: Uuid = Uuid::from_u128(0x3002);
/// VERIFIED
pub const CULTURAL_NIGHT_ID: Uuid = Uuid::from_u128(0x3003);
/// DRAFT
pub const BLOCKCHAIN_SEMINAR_ID: Uuid = Uuid::from_u128(0x3004);
/// REJECTED
pub const CRICKET_TOURNAMENT_ID: Uuid = Uuid::from_u128(0x3005);

pub const DESK_ASSIGNMENT_ID: Uuid = Uuid::from_u128(0x4001);
pub const TECH_SUPPORT_ASSIGNMENT_ID: Uuid = Uuid::from_u128(0x4002);
pub const STAGE_ASSIGNMENT_ID: Uuid = Uuid::from_u128(0x4003);

pub const WORKSHOP_REGISTRATION_ID: Uuid = Uuid::from_u128(0x5001);
pub const CULTURAL_REGISTRATION_ID: Uuid = Uuid::from_u128(0x5002);

/// A fresh store holding the demo data.
pub fn demo_store() -> AppResult<EntityStore> {
    let store = EntityStore::new();
    populate(&store)?;
    Ok(store)
}

pub fn populate(store: &EntityStore) -> AppResult<()> {
    store.write(|t| {
        seed_users(t)?;
        seed_clubs(t)?;
        seed_events(t)?;
        seed_assignments(t)?;
        seed_registrations(t)?;
        seed_audit_log(t)?;

        tracing::info!(
            users = t.users.len(),
            clubs = t.clubs.len(),
            events = t.event_count(),
            "Seeded demo data"
        );
        Ok(())
    })
}

fn at(value: &str) -> AppResult<DateTime<Utc>> {
    value
        .parse()
        .map_err(|e| AppError::InternalServerError(format!("bad seed timestamp '{}': {}", value, e)))
}

fn date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::InternalServerError(format!("bad seed date '{}': {}", value, e)))
}

fn time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AppError::InternalServerError(format!("bad seed time '{}': {}", value, e)))
}

fn seed_users(t: &mut Tables) -> AppResult<()> {
    #[rustfmt::skip]
    let rows = [
        (ADMIN_ID, "admin@college.edu", "Admin User", Role::Admin, None, None, None, "2024-01-01T00:00:00Z"),
        (STUDENT_ID, "student@college.edu", "John Student", Role::Student, Some("Computer Science"), None, None, "2024-01-15T00:00:00Z"),
        (CLUB_HEAD_ID, "clubhead@college.edu", "Sarah Club Head", Role::ClubHead, Some("Computer Science"), None, Some("Tech Club"), "2024-01-10T00:00:00Z"),
        (ORGANIZER_ID, "organizer@college.edu", "Mike Organizer", Role::EventOrganizer, Some("Events"), None, None, "2024-01-08T00:00:00Z"),
        (HOD_ID, "hod@college.edu", "Dr. Robert HOD", Role::Authority, Some("Computer Science"), Some(AuthorityType::Hod), None, "2024-01-05T00:00:00Z"),
        (VOLUNTEER_ID, "volunteer@college.edu", "Emma Volunteer", Role::Volunteer, Some("Computer Science"), None, None, "2024-01-20T00:00:00Z"),
        (CULTURAL_HEAD_ID, "cultural@college.edu", "Priya Cultural", Role::ClubHead, Some("Arts"), None, Some("Cultural Club"), "2024-01-12T00:00:00Z"),
        (SPORTS_HEAD_ID, "sports@college.edu", "Raj Sports", Role::ClubHead, Some("Physical Education"), None, Some("Sports Club"), "2024-01-08T00:00:00Z"),
    ];

    for (id, email, name, role, department, authority_type, club_name, created) in rows {
        t.users.insert(
            id,
            User {
                id,
                email: email.to_string(),
                name: name.to_string(),
                role,
                department: department.map(str::to_string),
                authority_type,
                club_name: club_name.map(str::to_string),
                created_at: at(created)?,
            },
        );
    }
    Ok(())
}

fn seed_clubs(t: &mut Tables) -> AppResult<()> {
    #[rustfmt::skip]
    let rows = [
        (TECH_CLUB_ID, "Tech Club", "Technology and Innovation Club", CLUB_HEAD_ID, "Computer Science", 45, "2024-01-10T00:00:00Z"),
        (CULTURAL_CLUB_ID, "Cultural Club", "Arts and Cultural Activities", CULTURAL_HEAD_ID, "Arts", 67, "2024-01-12T00:00:00Z"),
        (SPORTS_CLUB_ID, "Sports Club", "Sports and Athletics", SPORTS_HEAD_ID, "Physical Education", 89, "2024-01-08T00:00:00Z"),
    ];

    for (id, name, description, head_id, department, member_count, created) in rows {
        let head_name = t.user(head_id)?.name.clone();
        t.clubs.insert(
            id,
            Club {
                id,
                name: name.to_string(),
                description: description.to_string(),
                head_id,
                head_name,
                department: department.to_string(),
                member_count,
                created_at: at(created)?,
            },
        );
    }
    Ok(())
}

struct SeedEvent {
    id: Uuid,
    title: &'static str,
    description: &'static str,
    club_id: Uuid,
    date: &'static str,
    time: &'static str,
    venue: &'static str,
    attendees: u32,
    budget: i64,
    status: EventStatus,
    category: &'static str,
    requirements: &'static str,
    created: &'static str,
    updated: &'static str,
}

fn seed_events(t: &mut Tables) -> AppResult<()> {
    let rows = [
        SeedEvent {
            id: TECH_FEST_ID,
            title: "Annual Tech Fest 2026",
            description: "A 3-day technical festival featuring hackathons, workshops, and tech talks",
            club_id: TECH_CLUB_ID,
            date: "2026-02-15",
            time: "09:00",
            venue: "Main Auditorium",
            attendees: 500,
            budget: 150_000,
            status: EventStatus::Submitted,
            category: "Technical",
            requirements: "Projector, Sound System, WiFi, Chairs for 500",
            created: "2026-01-03T10:00:00Z",
            updated: "2026-01-04T14:30:00Z",
        },
        SeedEvent {
            id: ML_WORKSHOP_ID,
            title: "AI & ML Workshop",
            description: "Hands-on workshop on Machine Learning fundamentals",
            club_id: TECH_CLUB_ID,
            date: "2026-01-25",
            time: "14:00",
            venue: "CS Lab 201",
            attendees: 50,
            budget: 15_000,
            status: EventStatus::Approved,
            category: "Workshop",
            requirements: "Computer Lab, Projector",
            created: "2025-12-20T09:00:00Z",
            updated: "2026-01-02T11:00:00Z",
        },
        SeedEvent {
            id: CULTURAL_NIGHT_ID,
            title: "Cultural Night",
            description: "Annual cultural event with music, dance, and drama performances",
            club_id: CULTURAL_CLUB_ID,
            date: "2026-03-10",
            time: "18:00",
            venue: "Open Air Theatre",
            attendees: 800,
            budget: 200_000,
            status: EventStatus::Verified,
            category: "Cultural",
            requirements: "Stage, Lights, Sound System, Security",
            created: "2026-01-01T08:00:00Z",
            updated: "2026-01-05T16:00:00Z",
        },
        SeedEvent {
            id: BLOCKCHAIN_SEMINAR_ID,
            title: "Blockchain Seminar",
            description: "Introduction to Blockchain Technology and Cryptocurrency",
            club_id: TECH_CLUB_ID,
            date: "2026-02-05",
            time: "10:00",
            venue: "Seminar Hall B",
            attendees: 100,
            budget: 25_000,
            status: EventStatus::Draft,
            category: "Seminar",
            requirements: "Projector, Microphone, Seating for 100",
            created: "2026-01-04T12:00:00Z",
            updated: "2026-01-04T12:00:00Z",
        },
        SeedEvent {
            id: CRICKET_TOURNAMENT_ID,
            title: "Inter-College Cricket Tournament",
            description: "5-day cricket tournament with 8 teams",
            club_id: SPORTS_CLUB_ID,
            date: "2026-02-20",
            time: "08:00",
            venue: "College Cricket Ground",
            attendees: 1000,
            budget: 180_000,
            status: EventStatus::Rejected,
            category: "Sports",
            requirements: "Ground maintenance, First aid, Refreshments",
            created: "2025-12-28T10:00:00Z",
            updated: "2026-01-03T15:00:00Z",
        },
    ];

    for row in rows {
        let club = t.club(row.club_id)?.clone();
        let event = Event {
            id: row.id,
            title: row.title.to_string(),
            description: row.description.to_string(),
            club_id: club.id,
            club_name: club.name.clone(),
            created_by: club.head_id,
            creator_name: club.head_name.clone(),
            event_date: date(row.date)?,
            event_time: time(row.time)?,
            venue: row.venue.to_string(),
            expected_attendees: row.attendees,
            budget: Decimal::from(row.budget),
            status: row.status,
            category: row.category.to_string(),
            requirements: row.requirements.to_string(),
            created_at: at(row.created)?,
            updated_at: at(row.updated)?,
        };
        let workflow = seed_workflow(t, &event)?;
        t.insert_event(event, workflow)?;
    }
    Ok(())
}

fn seed_workflow(t: &Tables, event: &Event) -> AppResult<ApprovalWorkflow> {
    let head = Actor::from(t.user(event.created_by)?);
    let organizer = Actor::from(t.user(ORGANIZER_ID)?);
    let hod = Actor::from(t.user(HOD_ID)?);

    let mut workflow = ApprovalWorkflow::with_status(event.id, event.status);

    match event.id {
        id if id == TECH_FEST_ID => {
            let submitted = at("2026-01-04T14:30:00Z")?;
            workflow.submitted_at = Some(submitted);
            workflow.submitted_by = Some(head.id);
            workflow.add_comment(
                &head,
                "Event submitted for approval. All arrangements are planned.",
                submitted,
            );
        }
        id if id == ML_WORKSHOP_ID => {
            let verified = at("2025-12-22T11:00:00Z")?;
            let approved = at("2026-01-02T11:00:00Z")?;
            workflow.submitted_at = Some(at("2025-12-20T09:30:00Z")?);
            workflow.submitted_by = Some(head.id);
            workflow.verified_at = Some(verified);
            workflow.verified_by = Some(organizer.id);
            workflow.approved_at = Some(approved);
            workflow.approved_by = Some(hod.id);
            workflow.add_comment(
                &organizer,
                "Event details verified. Venue and resources available.",
                verified,
            );
            workflow.add_comment(&hod, "Approved. Excellent initiative for students.", approved);
        }
        id if id == CULTURAL_NIGHT_ID => {
            let verified = at("2026-01-05T16:00:00Z")?;
            workflow.submitted_at = Some(at("2026-01-02T10:00:00Z")?);
            workflow.submitted_by = Some(head.id);
            workflow.verified_at = Some(verified);
            workflow.verified_by = Some(organizer.id);
            workflow.add_comment(&organizer, "Verified. Waiting for authority approval.", verified);
        }
        id if id == CRICKET_TOURNAMENT_ID => {
            let rejected = at("2026-01-03T15:00:00Z")?;
            workflow.submitted_at = Some(at("2025-12-28T11:00:00Z")?);
            workflow.submitted_by = Some(head.id);
            workflow.verified_at = Some(at("2025-12-30T10:00:00Z")?);
            workflow.verified_by = Some(organizer.id);
            workflow.rejected_at = Some(rejected);
            workflow.rejected_by = Some(hod.id);
            workflow.rejection_reason =
                Some("Budget exceeds allocated limit for sports events. Please revise.".to_string());
            workflow.add_comment(&hod, "Budget too high. Please reduce and resubmit.", rejected);
        }
        _ => {}
    }

    Ok(workflow)
}

fn seed_assignments(t: &mut Tables) -> AppResult<()> {
    #[rustfmt::skip]
    let rows = [
        (DESK_ASSIGNMENT_ID, ML_WORKSHOP_ID, "Registration Desk Management", AssignmentStatus::Accepted, "2026-01-03T10:00:00Z"),
        (TECH_SUPPORT_ASSIGNMENT_ID, ML_WORKSHOP_ID, "Technical Support", AssignmentStatus::Completed, "2026-01-03T10:30:00Z"),
        (STAGE_ASSIGNMENT_ID, CULTURAL_NIGHT_ID, "Stage Coordination", AssignmentStatus::Pending, "2026-01-05T12:00:00Z"),
    ];

    let volunteer_name = t.user(VOLUNTEER_ID)?.name.clone();
    for (id, event_id, task, status, assigned) in rows {
        let event_title = t.event(event_id)?.title.clone();
        t.assignments.insert(
            id,
            VolunteerAssignment {
                id,
                event_id,
                event_title,
                volunteer_id: VOLUNTEER_ID,
                volunteer_name: volunteer_name.clone(),
                task: task.to_string(),
                status,
                assigned_at: at(assigned)?,
            },
        );
    }
    Ok(())
}

fn seed_registrations(t: &mut Tables) -> AppResult<()> {
    #[rustfmt::skip]
    let rows = [
        (WORKSHOP_REGISTRATION_ID, ML_WORKSHOP_ID, "2026-01-02T14:00:00Z", true),
        (CULTURAL_REGISTRATION_ID, CULTURAL_NIGHT_ID, "2026-01-05T10:00:00Z", false),
    ];

    let student_name = t.user(STUDENT_ID)?.name.clone();
    for (id, event_id, registered, attended) in rows {
        let event_title = t.event(event_id)?.title.clone();
        t.registrations.insert(
            id,
            EventRegistration {
                id,
                event_id,
                event_title,
                student_id: STUDENT_ID,
                student_name: student_name.clone(),
                registered_at: at(registered)?,
                attended,
            },
        );
    }
    Ok(())
}

fn seed_audit_log(t: &mut Tables) -> AppResult<()> {
    #[rustfmt::skip]
    let rows = [
        (CLUB_HEAD_ID, "192.168.1.10", AuditAction::CreateEvent, TECH_FEST_ID, "Created event: Annual Tech Fest 2026", "2026-01-03T10:00:00Z"),
        (CLUB_HEAD_ID, "192.168.1.10", AuditAction::SubmitEvent, TECH_FEST_ID, "Submitted event for approval: Annual Tech Fest 2026", "2026-01-04T14:30:00Z"),
        (ORGANIZER_ID, "192.168.1.15", AuditAction::VerifyEvent, ML_WORKSHOP_ID, "Verified event: AI & ML Workshop", "2025-12-22T11:00:00Z"),
        (HOD_ID, "192.168.1.20", AuditAction::ApproveEvent, ML_WORKSHOP_ID, "Approved event: AI & ML Workshop", "2026-01-02T11:00:00Z"),
        (HOD_ID, "192.168.1.20", AuditAction::RejectEvent, CRICKET_TOURNAMENT_ID, "Rejected event: Inter-College Cricket Tournament", "2026-01-03T15:00:00Z"),
    ];

    for (user_id, ip, action, event_id, details, timestamp) in rows {
        let actor = Actor::from(t.user(user_id)?).with_ip(Some(ip.to_string()));
        let entry = AuditLog::new(&actor, action, EntityType::Event, event_id, details, at(timestamp)?);
        t.append_audit(entry);
    }
    Ok(())
}
