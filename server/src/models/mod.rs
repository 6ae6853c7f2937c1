pub mod assignment;
pub mod audit;
pub mod club;
pub mod event;
pub mod registration;
pub mod role;
pub mod user;
pub mod workflow;

pub use assignment::{AssignmentStatus, VolunteerAssignment};
pub use audit::{AuditAction, AuditLog, EntityType};
pub use club::Club;
pub use event::{Event, EventChanges, EventFilter, EventStatus, NewEvent};
pub use registration::EventRegistration;
pub use role::{AuthorityType, Permission, Role};
pub use user::{Actor, User};
pub use workflow::{ApprovalWorkflow, Transition, WorkflowComment};
