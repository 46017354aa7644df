use crate::auth::AuthUser;
use crate::dtos::blacklist::{
    BlacklistDetailResponse, BlacklistResponse, CreateBlacklistRequest, UpdateBlacklistRequest,
};
use crate::dtos::common::ApiResponse;
use crate::dtos::course::CourseResponse;
use crate::error::ApiResult;
use crate::routes::curriculum::load_scoped_curriculum;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use database::error::ServiceError;
use database::services::blacklist::BlacklistService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/blacklists",
    responses(
        (status = 200, description = "Blacklists visible to the caller", body = [BlacklistResponse])
    ),
    tag = "Blacklists"
)]
pub async fn list_blacklists(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<BlacklistResponse>>>> {
    let scope = auth.visible_departments(&state).await?;
    let blacklists =
        BlacklistService::list_for_departments(&state.db, scope.as_deref().map(|v| &v[..]))
            .await?;

    Ok(ApiResponse::new(
        blacklists.into_iter().map(BlacklistResponse::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/blacklists/{id}",
    params(("id" = Uuid, Path, description = "Blacklist id")),
    responses(
        (status = 200, description = "Blacklist with its courses", body = BlacklistDetailResponse),
        (status = 404, description = "Blacklist not found")
    ),
    tag = "Blacklists"
)]
pub async fn get_blacklist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<BlacklistDetailResponse>>> {
    let (blacklist, courses) = BlacklistService::get_with_courses(&state.db, id)
        .await?
        .ok_or(ServiceError::not_found("blacklist"))?;
    auth.ensure_department(&state, blacklist.department_id)
        .await?;

    Ok(ApiResponse::new(BlacklistDetailResponse {
        blacklist: blacklist.into(),
        courses: courses.into_iter().map(CourseResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/blacklists",
    request_body = CreateBlacklistRequest,
    responses(
        (status = 200, description = "Blacklist created", body = BlacklistResponse),
        (status = 400, description = "Unknown course id in the list")
    ),
    tag = "Blacklists"
)]
pub async fn create_blacklist(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBlacklistRequest>,
) -> ApiResult<Json<ApiResponse<BlacklistResponse>>> {
    auth.require_manager()?;
    auth.ensure_department(&state, req.department_id).await?;

    let blacklist = BlacklistService::create(&state.db, auth.user.id, req.into()).await?;
    Ok(ApiResponse::new(blacklist.into()))
}

/// Rename and/or replace the full course set
#[utoipa::path(
    put,
    path = "/blacklists/{id}",
    params(("id" = Uuid, Path, description = "Blacklist id")),
    request_body = UpdateBlacklistRequest,
    responses(
        (status = 200, description = "Blacklist updated", body = BlacklistResponse),
        (status = 404, description = "Blacklist not found")
    ),
    tag = "Blacklists"
)]
pub async fn update_blacklist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBlacklistRequest>,
) -> ApiResult<Json<ApiResponse<BlacklistResponse>>> {
    auth.require_manager()?;
    ensure_blacklist_scope(&state, &auth, id).await?;

    let blacklist = BlacklistService::update(&state.db, auth.user.id, id, req.into()).await?;
    Ok(ApiResponse::new(blacklist.into()))
}

#[utoipa::path(
    delete,
    path = "/blacklists/{id}",
    params(("id" = Uuid, Path, description = "Blacklist id")),
    responses(
        (status = 200, description = "Blacklist deleted"),
        (status = 404, description = "Blacklist not found")
    ),
    tag = "Blacklists"
)]
pub async fn delete_blacklist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    ensure_blacklist_scope(&state, &auth, id).await?;

    BlacklistService::delete(&state.db, auth.user.id, id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    post,
    path = "/curricula/{id}/blacklists/{blacklist_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("blacklist_id" = Uuid, Path, description = "Blacklist id")
    ),
    responses(
        (status = 200, description = "Blacklist attached"),
        (status = 404, description = "Curriculum or blacklist not found"),
        (status = 409, description = "Already attached")
    ),
    tag = "Blacklists"
)]
pub async fn attach_blacklist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, blacklist_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    BlacklistService::attach(&state.db, auth.user.id, id, blacklist_id).await?;
    Ok(ApiResponse::new(()))
}

#[utoipa::path(
    delete,
    path = "/curricula/{id}/blacklists/{blacklist_id}",
    params(
        ("id" = Uuid, Path, description = "Curriculum id"),
        ("blacklist_id" = Uuid, Path, description = "Blacklist id")
    ),
    responses(
        (status = 200, description = "Blacklist detached"),
        (status = 404, description = "Blacklist was not attached")
    ),
    tag = "Blacklists"
)]
pub async fn detach_blacklist(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, blacklist_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    auth.require_manager()?;
    load_scoped_curriculum(&state, &auth, id).await?;

    BlacklistService::detach(&state.db, auth.user.id, id, blacklist_id).await?;
    Ok(ApiResponse::new(()))
}

async fn ensure_blacklist_scope(
    state: &AppState,
    auth: &AuthUser,
    blacklist_id: Uuid,
) -> ApiResult<()> {
    let (blacklist, _) = BlacklistService::get_with_courses(&state.db, blacklist_id)
        .await?
        .ok_or(ServiceError::not_found("blacklist"))?;
    auth.ensure_department(state, blacklist.department_id).await
}
