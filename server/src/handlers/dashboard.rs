use axum::extract::{Query, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use super::actor::CurrentActor;
use crate::config::AUDIT_PAGE_MAX;
use crate::models::{Permission, Role};
use crate::services::access::require_permission;
use crate::services::{AppState, DashboardStats};
use crate::utils::error::AppError;
use crate::utils::response::{success, Page};

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Serialize)]
struct DashboardPayload {
    role: Role,
    home: &'static str,
    stats: DashboardStats,
}

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Response, AppError> {
    let payload = DashboardPayload {
        role: actor.role,
        home: actor.role.dashboard_path(),
        stats: state.queries.dashboard(&actor)?,
    };
    Ok(success(payload, "Dashboard retrieved"))
}

pub async fn platform_stats(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
) -> Result<Response, AppError> {
    let stats = state.queries.platform_stats()?;
    Ok(success(stats, "Statistics retrieved"))
}

pub async fn audit_log(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Query(query): Query<AuditQuery>,
) -> Result<Response, AppError> {
    require_permission(&actor, Permission::ViewAuditLog)?;

    let limit = query
        .limit
        .unwrap_or(state.audit_page_limit)
        .clamp(1, AUDIT_PAGE_MAX);
    let offset = query.offset.unwrap_or(0);
    let items = state.queries.list_audit_log(limit, offset)?;

    Ok(success(
        Page {
            items,
            limit,
            offset,
        },
        "Audit log retrieved",
    ))
}
