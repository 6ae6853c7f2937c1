pub mod access;
pub mod assignments;
pub mod queries;
pub mod registrations;
pub mod workflow;

use std::sync::Arc;

pub use assignments::AssignmentManager;
pub use queries::{DashboardStats, EventDetail, PlatformStats, QueryService};
pub use registrations::RegistrationManager;
pub use workflow::WorkflowEngine;

use crate::store::EntityStore;

/// Everything the service layer needs, sharing one entity store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntityStore>,
    pub workflow: WorkflowEngine,
    pub assignments: AssignmentManager,
    pub registrations: RegistrationManager,
    pub queries: QueryService,
    pub audit_page_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<EntityStore>, audit_page_limit: usize) -> Self {
        Self {
            workflow: WorkflowEngine::new(store.clone()),
            assignments: AssignmentManager::new(store.clone()),
            registrations: RegistrationManager::new(store.clone()),
            queries: QueryService::new(store.clone()),
            store,
            audit_page_limit,
        }
    }
}
