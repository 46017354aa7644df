use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use database::entities::users;
use database::services::access::AccessService;
use std::sync::Arc;
use uuid::Uuid;

/// Caller identity resolved from the `x-user-id` header.
///
/// Authentication itself happens upstream; this extractor only checks that the
/// header names a known user and loads the role used for access decisions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: users::Model,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing x-user-id header".to_string()))?;

        let user_id = Uuid::parse_str(header)
            .map_err(|_| ApiError::Unauthorized("x-user-id is not a valid uuid".to_string()))?;

        let user = AccessService::get_user(&state.db, user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("unknown user".to_string()))?;

        Ok(AuthUser { user })
    }
}

impl AuthUser {
    /// Curriculum-management endpoints are limited to super admins and
    /// chairpersons
    pub fn require_manager(&self) -> ApiResult<()> {
        if self.user.role.can_manage_curricula() {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "this operation requires curriculum management rights".to_string(),
            ))
        }
    }

    /// Department ids this caller may touch; `None` means unrestricted.
    ///
    /// Resolved through the per-user cache, so a result can be up to one TTL
    /// stale.
    pub async fn visible_departments(
        &self,
        state: &AppState,
    ) -> ApiResult<Option<Arc<Vec<Uuid>>>> {
        if self.user.role.bypasses_department_scope() {
            return Ok(None);
        }

        if let Some(ids) = state.departments.get(self.user.id) {
            return Ok(Some(ids));
        }

        let ids = match self.user.faculty_id {
            Some(faculty_id) => {
                Arc::new(AccessService::department_ids_for_faculty(&state.db, faculty_id).await?)
            }
            None => Arc::new(Vec::new()),
        };
        state.departments.insert(self.user.id, ids.clone());
        Ok(Some(ids))
    }

    /// Fails with FORBIDDEN when the department is outside the caller's scope
    pub async fn ensure_department(
        &self,
        state: &AppState,
        department_id: Uuid,
    ) -> ApiResult<()> {
        match self.visible_departments(state).await? {
            None => Ok(()),
            Some(ids) if ids.contains(&department_id) => Ok(()),
            Some(_) => Err(ApiError::Forbidden(
                "department is outside your faculty".to_string(),
            )),
        }
    }
}
