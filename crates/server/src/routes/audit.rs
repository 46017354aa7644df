use crate::auth::AuthUser;
use crate::dtos::audit::{AuditLogResponse, AuditQueryParams};
use crate::dtos::common::{ApiResponse, Paginated, PaginationMeta};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use database::services::audit::AuditService;
use models::role::Role;

/// Newest-first audit trail, super admin only
#[utoipa::path(
    get,
    path = "/audit-logs",
    params(AuditQueryParams),
    responses(
        (status = 200, description = "Audit log entries", body = Paginated<AuditLogResponse>),
        (status = 403, description = "Caller is not a super admin")
    ),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<AuditQueryParams>,
) -> ApiResult<Json<ApiResponse<Paginated<AuditLogResponse>>>> {
    if auth.user.role != Role::SuperAdmin {
        return Err(ApiError::Forbidden(
            "the audit log is restricted to super admins".to_string(),
        ));
    }

    let (entries, total_items) = AuditService::list_paginated(
        &state.db,
        params.page,
        params.per_page,
        params.entity_type,
        params.user_id,
    )
    .await?;

    Ok(ApiResponse::new(Paginated {
        items: entries.into_iter().map(AuditLogResponse::from).collect(),
        pagination: PaginationMeta::new(params.page, params.per_page, total_items),
    }))
}
